use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Destination for the finished translation unit.
pub trait Sink {
    fn persist(&mut self, output: &str) -> io::Result<()>;
}

impl Sink for String {
    fn persist(&mut self, output: &str) -> io::Result<()> {
        self.push_str(output);
        Ok(())
    }
}

/// Writes the output to a file, creating missing parent directories.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(path: P) -> FileSink {
        FileSink {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn persist(&mut self, output: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        info!("Writing {}", self.path.display());
        fs::write(&self.path, output).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", self.path.display(), e))
        })
    }
}
