use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use env_logger::Env;

use pdf_ngrams_core::{AnalysisConfig, Analyzer, DiagnosticSink, FailurePolicy, LogSink, PdfExtractor};

/// Find the most frequent sequences of N words in a PDF.
#[derive(Parser, Debug)]
#[command(name = "pdf-ngrams", version)]
struct Args {
	/// Path to the PDF file to analyze.
	pdf_file: PathBuf,

	/// Path to the dictionary (word list) file.
	dictionary: PathBuf,

	/// Length of the sliding n-grams.
	#[arg(short = 'n', long = "ngrams", default_value_t = 3, allow_negative_numbers = true)]
	ngrams: i64,

	/// Number of most frequent n-grams to display.
	#[arg(short = 't', long = "top", default_value_t = 1, allow_negative_numbers = true)]
	top: i64,

	/// Minimum length of the words to consider.
	#[arg(short = 'm', long = "min_length", default_value_t = 3, allow_negative_numbers = true)]
	min_length: i64,

	/// Exit with an error when the PDF or the dictionary cannot be read.
	#[arg(long)]
	strict: bool,

	/// Print the full report as JSON instead of one line per n-gram.
	#[arg(long)]
	json: bool,
}

impl Args {
	fn config(&self) -> AnalysisConfig {
		let mut config = AnalysisConfig::from_signed(self.ngrams, self.top, self.min_length);
		if self.strict {
			config.policy = FailurePolicy::Strict;
		}
		config
	}
}

/// Logs to stderr as `timestamp - LEVEL - message`, `info` unless `RUST_LOG` says otherwise.
fn init_logger() {
	env_logger::Builder::from_env(Env::default().default_filter_or("info"))
		.format(|buf, record| {
			writeln!(buf, "{} - {} - {}", buf.timestamp_millis(), record.level(), record.args())
		})
		.init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	init_logger();
	let args = Args::parse();

	let sink = LogSink;
	let analyzer = Analyzer::new(args.config(), &PdfExtractor, &sink);
	let report = analyzer.run(&args.pdf_file, &args.dictionary)?;

	if args.json {
		println!("{}", serde_json::to_string_pretty(&report)?);
		return Ok(());
	}

	sink.info(format_args!("Displaying the top {} most frequent n-grams", analyzer.config().top));
	for ranked in &report.ngrams {
		println!("{ranked}");
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let args = Args::try_parse_from(["pdf-ngrams", "doc.pdf", "fr.txt"]).unwrap();

		assert_eq!(args.pdf_file, PathBuf::from("doc.pdf"));
		assert_eq!(args.dictionary, PathBuf::from("fr.txt"));
		assert_eq!(args.config(), AnalysisConfig::default());
		assert!(!args.json);
	}

	#[test]
	fn short_and_long_flags() {
		let args = Args::try_parse_from(["pdf-ngrams", "doc.pdf", "fr.txt", "-n", "2", "--top", "5", "-m", "4"])
			.unwrap();
		let config = args.config();

		assert_eq!(config.ngram_size, 2);
		assert_eq!(config.top, 5);
		assert_eq!(config.min_length, 4);
		assert_eq!(config.policy, FailurePolicy::Lenient);

		let args = Args::try_parse_from(["pdf-ngrams", "doc.pdf", "fr.txt", "--min_length", "1", "--ngrams", "4"])
			.unwrap();
		assert_eq!(args.config().min_length, 1);
		assert_eq!(args.config().ngram_size, 4);
	}

	#[test]
	fn negative_values_are_accepted() {
		let args = Args::try_parse_from(["pdf-ngrams", "doc.pdf", "fr.txt", "-n", "-1", "-t", "-3", "-m", "-2"])
			.unwrap();
		let config = args.config();

		assert_eq!((config.ngram_size, config.top, config.min_length), (0, 0, 0));
	}

	#[test]
	fn strict_and_json_switches() {
		let args = Args::try_parse_from(["pdf-ngrams", "--strict", "--json", "doc.pdf", "fr.txt"]).unwrap();

		assert!(args.json);
		assert_eq!(args.config().policy, FailurePolicy::Strict);
	}

	#[test]
	fn missing_dictionary_argument_is_rejected() {
		assert!(Args::try_parse_from(["pdf-ngrams", "doc.pdf"]).is_err());
	}
}
