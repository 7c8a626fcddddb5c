// src/file.rs

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tracing::debug;

/// Write the rendered report to `path`, or to stdout when `None`.
pub fn write_output(path: Option<&Path>, contents: &str) -> io::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            fs::write(path, contents)?;
            debug!(path = %path.display(), "results saved");
            Ok(())
        }
        None => {
            let mut out = io::stdout().lock();
            writeln!(out, "{contents}")?;
            out.flush()
        }
    }
}

/// Create directory (and parents) if missing; error if a file is in the way.
pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", dir.display()),
            ));
        }
        return Ok(());
    }
    fs::create_dir_all(dir)
}
