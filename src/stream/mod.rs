//! Byte stream abstraction and its adapters
//!
//! This module defines the `Stream` trait shared by every adapter in the
//! crate, together with the in-memory, empty, concatenating and no-seek
//! implementations.

pub mod errors;
pub mod decorator;
pub mod string;
pub mod null;
pub mod no_seek;
pub mod concatenated;
#[cfg(test)]
mod tests;

use std::any::Any;
use std::collections::HashMap;
use std::io::SeekFrom;

pub use errors::{StreamError, StreamResult};
pub use decorator::StreamDecorator;
pub use string::StringStream;
pub use null::NullStream;
pub use no_seek::NoSeekStream;
pub use concatenated::ConcatenatedStream;

/// Key/value metadata reported by a stream
pub type Metadata = HashMap<String, String>;

/// Underlying resource handed back by `Stream::detach`
pub type Detached = Box<dyn Any>;

/// Reference point for `Stream::seek`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whence {
    /// Offset is absolute
    #[default]
    Set,
    /// Offset is relative to the current position
    Current,
    /// Offset is relative to the end of the stream
    End,
}

impl Whence {
    /// Converts an offset measured from this reference point into a `SeekFrom`
    pub fn seek_from(self, offset: i64) -> StreamResult<SeekFrom> {
        match self {
            Whence::Set => u64::try_from(offset)
                .map(SeekFrom::Start)
                .map_err(|_| StreamError::InvalidArgument(format!("negative absolute offset {}", offset))),
            Whence::Current => Ok(SeekFrom::Current(offset)),
            Whence::End => Ok(SeekFrom::End(offset)),
        }
    }
}

/// A sequential byte stream with a cursor
///
/// Mirrors the usual readable/writable/seekable stream contract: reads
/// consume bytes from the cursor, `contents` consumes everything that is
/// left, and capability queries tell callers which operations are allowed.
pub trait Stream {
    /// Reads up to `length` bytes from the current position
    fn read(&mut self, length: usize) -> StreamResult<Vec<u8>>;

    /// Returns the remaining contents of the stream
    fn contents(&mut self) -> StreamResult<Vec<u8>>;

    /// Writes `data` at the current position and returns the number of bytes written
    fn write(&mut self, data: &[u8]) -> StreamResult<usize>;

    /// Moves the cursor to `offset` relative to `whence`
    fn seek(&mut self, offset: i64, whence: Whence) -> StreamResult<()>;

    /// Moves the cursor back to the start of the stream
    fn rewind(&mut self) -> StreamResult<()>;

    /// Returns the current position of the cursor
    fn tell(&self) -> StreamResult<i64>;

    /// Returns true when the cursor is at the end of the stream
    fn eof(&self) -> bool;

    /// Returns the size of the stream in bytes, if known
    fn size(&self) -> Option<u64>;

    fn is_readable(&self) -> bool;

    fn is_writable(&self) -> bool;

    fn is_seekable(&self) -> bool;

    /// Closes the stream and any underlying resource
    fn close(&mut self) -> StreamResult<()>;

    /// Separates the underlying resource from the stream
    ///
    /// After detaching, the stream is unusable. Streams without an external
    /// resource return `None`.
    fn detach(&mut self) -> StreamResult<Option<Detached>>;

    /// Returns all metadata entries
    fn metadata(&self) -> Metadata;

    /// Returns a single metadata entry
    fn metadata_value(&self, key: &str) -> Option<String> {
        self.metadata().remove(key)
    }

    /// Reads the whole stream from the start, never failing
    ///
    /// Errors raised while rewinding or reading produce an empty buffer.
    fn to_bytes(&mut self) -> Vec<u8> {
        if self.is_seekable() && self.rewind().is_err() {
            return Vec::new();
        }
        self.contents().unwrap_or_default()
    }

    /// Lossy UTF-8 view of `to_bytes`
    fn to_string_lossy(&mut self) -> String {
        String::from_utf8_lossy(&self.to_bytes()).into_owned()
    }
}

impl Stream for Box<dyn Stream> {
    fn read(&mut self, length: usize) -> StreamResult<Vec<u8>> {
        (**self).read(length)
    }

    fn contents(&mut self) -> StreamResult<Vec<u8>> {
        (**self).contents()
    }

    fn write(&mut self, data: &[u8]) -> StreamResult<usize> {
        (**self).write(data)
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> StreamResult<()> {
        (**self).seek(offset, whence)
    }

    fn rewind(&mut self) -> StreamResult<()> {
        (**self).rewind()
    }

    fn tell(&self) -> StreamResult<i64> {
        (**self).tell()
    }

    fn eof(&self) -> bool {
        (**self).eof()
    }

    fn size(&self) -> Option<u64> {
        (**self).size()
    }

    fn is_readable(&self) -> bool {
        (**self).is_readable()
    }

    fn is_writable(&self) -> bool {
        (**self).is_writable()
    }

    fn is_seekable(&self) -> bool {
        (**self).is_seekable()
    }

    fn close(&mut self) -> StreamResult<()> {
        (**self).close()
    }

    fn detach(&mut self) -> StreamResult<Option<Detached>> {
        (**self).detach()
    }

    fn metadata(&self) -> Metadata {
        (**self).metadata()
    }

    fn metadata_value(&self, key: &str) -> Option<String> {
        (**self).metadata_value(key)
    }

    fn to_bytes(&mut self) -> Vec<u8> {
        (**self).to_bytes()
    }
}
