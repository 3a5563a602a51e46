//! Stream that never holds any data

use super::{Detached, Metadata, Stream, StreamError, StreamResult, Whence};

/// Always-empty, read-only stream
///
/// Reads return nothing, the cursor never leaves 0 and writes are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullStream;

impl NullStream {
    pub fn new() -> Self {
        NullStream
    }
}

impl Stream for NullStream {
    fn read(&mut self, _length: usize) -> StreamResult<Vec<u8>> {
        Ok(Vec::new())
    }

    fn contents(&mut self) -> StreamResult<Vec<u8>> {
        Ok(Vec::new())
    }

    fn write(&mut self, _data: &[u8]) -> StreamResult<usize> {
        Err(StreamError::Unsupported("cannot write to NullStream".to_string()))
    }

    fn seek(&mut self, _offset: i64, _whence: Whence) -> StreamResult<()> {
        Ok(())
    }

    fn rewind(&mut self) -> StreamResult<()> {
        Ok(())
    }

    fn tell(&self) -> StreamResult<i64> {
        Ok(0)
    }

    fn eof(&self) -> bool {
        true
    }

    fn size(&self) -> Option<u64> {
        Some(0)
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        false
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
}
