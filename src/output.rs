use std::fs::File;
use std::io::Write;
use std::path::Path;
use crate::error::{AppError, Result};

/// Creates or truncates `path` and writes `body` to it as-is.
pub fn write_response<P: AsRef<Path>>(path: P, body: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let map_err = |e: std::io::Error| AppError::OutputError(format!("'{}': {}", path.display(), e));

    let mut file = File::create(path).map_err(map_err)?;
    file.write_all(body).map_err(map_err)?;
    file.flush().map_err(map_err)?;

    Ok(())
}
