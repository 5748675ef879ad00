use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole text file into memory.
///
/// - The file handle is released before returning, on success and on error
/// - Fails with `InvalidData` if the content is not valid UTF-8
pub(crate) fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Reads a whole binary file into memory.
pub(crate) fn read_bytes<P: AsRef<Path>>(filename: P) -> io::Result<Vec<u8>> {
	let mut contents = Vec::new();
	File::open(filename)?.read_to_end(&mut contents)?;
	Ok(contents)
}
