// crates/infra/src/io/file_reader.rs
use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use brushfilter_shared_kernel::{InfraResult, InfrastructureError};

/// Convenience helpers for reading documents with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Open the file at `path` with buffered reading.
    pub fn open_buffered(path: &Path) -> InfraResult<BufReader<File>> {
        File::open(path)
            .map(BufReader::new)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })
    }

    /// Read the entire file as UTF-8 text. `-` reads standard input.
    pub fn read_to_string(path: &Path) -> InfraResult<String> {
        let mut buf = String::new();
        let result = if path == Path::new("-") {
            io::stdin().lock().read_to_string(&mut buf)
        } else {
            Self::open_buffered(path)?.read_to_string(&mut buf)
        };
        result.map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        Ok(buf)
    }
}
