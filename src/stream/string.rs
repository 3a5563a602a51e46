//! In-memory stream over a byte buffer
//!
//! `StringStream` is always readable, writable and seekable. Writes overlay
//! the buffer at the cursor instead of inserting, and the cursor may be
//! moved anywhere, including before the start or past the end. A write from
//! past the end appends to the buffer.

use std::fmt;

use super::{Detached, Metadata, Stream, StreamError, StreamResult, Whence};

/// Mutable byte buffer with a cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringStream {
    buffer: Vec<u8>,
    position: i64,
}

impl StringStream {
    /// Creates a stream over `buffer` with the cursor at 0
    pub fn new(buffer: impl Into<Vec<u8>>) -> Self {
        StringStream {
            buffer: buffer.into(),
            position: 0,
        }
    }

    /// Returns the whole buffer regardless of the cursor
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consumes the stream, returning the buffer
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Cursor as an index into the buffer, `None` when negative
    fn index(&self) -> Option<usize> {
        usize::try_from(self.position).ok()
    }

    fn len(&self) -> i64 {
        self.buffer.len() as i64
    }
}

impl From<&str> for StringStream {
    fn from(value: &str) -> Self {
        StringStream::new(value)
    }
}

impl From<String> for StringStream {
    fn from(value: String) -> Self {
        StringStream::new(value)
    }
}

impl From<Vec<u8>> for StringStream {
    fn from(value: Vec<u8>) -> Self {
        StringStream::new(value)
    }
}

impl fmt::Display for StringStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.buffer))
    }
}

impl Stream for StringStream {
    fn read(&mut self, length: usize) -> StreamResult<Vec<u8>> {
        let start = match self.index() {
            Some(start) if start < self.buffer.len() => start,
            _ => return Ok(Vec::new()),
        };
        let end = start.saturating_add(length).min(self.buffer.len());
        let result = self.buffer[start..end].to_vec();
        self.position += result.len() as i64;

        Ok(result)
    }

    /// Returns the bytes after the cursor without moving it
    fn contents(&mut self) -> StreamResult<Vec<u8>> {
        match self.index() {
            Some(start) if start < self.buffer.len() => Ok(self.buffer[start..].to_vec()),
            _ => Ok(Vec::new()),
        }
    }

    fn write(&mut self, data: &[u8]) -> StreamResult<usize> {
        let start = self.index().ok_or_else(|| {
            StreamError::InvalidArgument(format!("cannot write at negative position {}", self.position))
        })?;
        let written = i64::try_from(data.len())
            .ok()
            .and_then(|len| self.position.checked_add(len))
            .ok_or_else(|| StreamError::InvalidArgument("write moves the cursor out of range".to_string()))?;

        // Past the end, the data lands right after the last byte
        let start = start.min(self.buffer.len());
        let overlap = (self.buffer.len() - start).min(data.len());
        self.buffer[start..start + overlap].copy_from_slice(&data[..overlap]);
        self.buffer.extend_from_slice(&data[overlap..]);
        self.position = written;

        Ok(data.len())
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> StreamResult<()> {
        let target = match whence {
            Whence::Set => Some(offset),
            Whence::Current => self.position.checked_add(offset),
            Whence::End => self.len().checked_add(offset),
        };
        self.position = target.ok_or_else(|| {
            StreamError::InvalidArgument(format!("seek by {} from {:?} overflows", offset, whence))
        })?;
        Ok(())
    }

    fn rewind(&mut self) -> StreamResult<()> {
        self.seek(0, Whence::Set)
    }

    fn tell(&self) -> StreamResult<i64> {
        Ok(self.position)
    }

    fn eof(&self) -> bool {
        self.position >= self.len()
    }

    fn size(&self) -> Option<u64> {
        Some(self.buffer.len() as u64)
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        true
    }

    fn is_seekable(&self) -> bool {
        true
    }

    fn close(&mut self) -> StreamResult<()> {
        Ok(())
    }

    fn detach(&mut self) -> StreamResult<Option<Detached>> {
        Ok(None)
    }

    fn metadata(&self) -> Metadata {
        Metadata::new()
    }

    /// Returns the whole buffer; the cursor is left untouched
    fn to_bytes(&mut self) -> Vec<u8> {
        self.buffer.clone()
    }
}
