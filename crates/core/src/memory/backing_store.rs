//! Backing store reader.
//!
//! The backing store is a static binary image of every page in the logical
//! address space, laid out page after page. A page load seeks to
//! `page * PAGE_SIZE` and reads exactly one page. A short read means the image
//! is truncated or corrupt and is fatal; nothing is retried.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::trace;

use crate::common::{PAGE_SIZE, PageNumber, Result, SimError};

use super::Page;

/// Random-access source of page contents.
pub trait BackingStore {
    /// Reads the full content of `page`.
    ///
    /// # Errors
    ///
    /// [`SimError::StoreRead`] if fewer than `PAGE_SIZE` bytes are available,
    /// [`SimError::StoreIo`] if seeking or reading fails.
    fn read_page(&mut self, page: PageNumber) -> Result<Page>;
}

/// Backing store over any seekable byte source.
///
/// Production runs open a file; tests wrap an in-memory `Cursor`.
#[derive(Debug)]
pub struct FileBackingStore<R> {
    reader: R,
}

impl FileBackingStore<BufReader<File>> {
    /// Opens the backing store image at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ResourceUnavailable`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SimError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: Read + Seek> FileBackingStore<R> {
    /// Wraps an already opened reader.
    pub const fn from_reader(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read + Seek> BackingStore for FileBackingStore<R> {
    fn read_page(&mut self, page: PageNumber) -> Result<Page> {
        let io_err = |source| SimError::StoreIo { page, source };

        let _ = self
            .reader
            .seek(SeekFrom::Start(page.store_offset()))
            .map_err(io_err)?;

        let mut buf = [0u8; PAGE_SIZE];
        let mut read = 0;
        while read < PAGE_SIZE {
            match self.reader.read(&mut buf[read..]) {
                Ok(0) => break,
                Ok(n) => read += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(io_err(e)),
            }
        }

        if read < PAGE_SIZE {
            return Err(SimError::StoreRead { page, read });
        }

        trace!(page = page.0, "read page from backing store");
        Ok(buf)
    }
}
