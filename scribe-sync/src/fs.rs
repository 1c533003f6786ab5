//! Filesystem seam used by the reconciler.
//!
//! [`OsFileSystem`] is the real thing; tests substitute a recording
//! implementation to prove that no write is issued on a no-op.

use std::io;
use std::path::Path;

/// The two filesystem calls a reconciliation may make.
pub trait FileSystem {
    /// Read the whole file into memory.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Create or truncate the file, then write all of `content`.
    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}

/// `std::fs`-backed filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    /// Only regular files are read. The type is checked before opening,
    /// since opening a FIFO blocks until a writer appears.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let meta = std::fs::metadata(path)?;
        if !meta.file_type().is_file() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a regular file",
            ));
        }
        std::fs::read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        std::fs::write(path, content)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        (**self).write(path, content)
    }
}
