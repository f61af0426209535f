use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Opens a text source for streaming.
///
/// The file is not read into memory; the tokenizer pulls bytes
/// from the returned reader on demand.
pub(crate) fn open_source<P: AsRef<Path>>(filename: P) -> io::Result<BufReader<File>> {
	Ok(BufReader::new(File::open(filename)?))
}

/// Names a model after its source file: the file stem, without directory
/// or extension (`"corpus/fables.txt"` gives `"fables"`).
///
/// # Errors
/// Fails with `InvalidInput` when the path has no file component (`"/"`).
pub(crate) fn get_filename<P: AsRef<Path>>(source_path: P) -> io::Result<String> {
	let stem = source_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}
