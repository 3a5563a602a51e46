//! Pass-through decorator capability
//!
//! A type implementing `StreamDecorator` only needs to expose the stream it
//! wraps. Every stream operation is a provided method forwarding to that
//! stream, and the blanket `Stream` implementation below routes through
//! these methods, so a concrete decorator overrides just the operations it
//! changes.
//!
//! Call decorated streams through the `Stream` trait. Keeping both traits in
//! scope at a call site makes the method names ambiguous.

use super::{Detached, Metadata, Stream, StreamResult, Whence};

/// Forwarding base for stream decorators
pub trait StreamDecorator {
    /// The decorated stream type
    type Inner: Stream + ?Sized;

    /// Returns the decorated stream
    fn inner(&self) -> &Self::Inner;

    /// Returns the decorated stream mutably
    fn inner_mut(&mut self) -> &mut Self::Inner;

    fn read(&mut self, length: usize) -> StreamResult<Vec<u8>> {
        Stream::read(self.inner_mut(), length)
    }

    fn contents(&mut self) -> StreamResult<Vec<u8>> {
        Stream::contents(self.inner_mut())
    }

    fn write(&mut self, data: &[u8]) -> StreamResult<usize> {
        Stream::write(self.inner_mut(), data)
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> StreamResult<()> {
        Stream::seek(self.inner_mut(), offset, whence)
    }

    fn rewind(&mut self) -> StreamResult<()> {
        Stream::rewind(self.inner_mut())
    }

    fn tell(&self) -> StreamResult<i64> {
        Stream::tell(self.inner())
    }

    fn eof(&self) -> bool {
        Stream::eof(self.inner())
    }

    fn size(&self) -> Option<u64> {
        Stream::size(self.inner())
    }

    fn is_readable(&self) -> bool {
        Stream::is_readable(self.inner())
    }

    fn is_writable(&self) -> bool {
        Stream::is_writable(self.inner())
    }

    fn is_seekable(&self) -> bool {
        Stream::is_seekable(self.inner())
    }

    fn close(&mut self) -> StreamResult<()> {
        Stream::close(self.inner_mut())
    }

    fn detach(&mut self) -> StreamResult<Option<Detached>> {
        Stream::detach(self.inner_mut())
    }

    fn metadata(&self) -> Metadata {
        Stream::metadata(self.inner())
    }

    fn metadata_value(&self, key: &str) -> Option<String> {
        Stream::metadata_value(self.inner(), key)
    }

    /// Forwards to the decorated stream's own conversion
    fn to_bytes(&mut self) -> Vec<u8> {
        Stream::to_bytes(self.inner_mut())
    }
}

impl<D: StreamDecorator> Stream for D {
    fn read(&mut self, length: usize) -> StreamResult<Vec<u8>> {
        StreamDecorator::read(self, length)
    }

    fn contents(&mut self) -> StreamResult<Vec<u8>> {
        StreamDecorator::contents(self)
    }

    fn write(&mut self, data: &[u8]) -> StreamResult<usize> {
        StreamDecorator::write(self, data)
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> StreamResult<()> {
        StreamDecorator::seek(self, offset, whence)
    }

    fn rewind(&mut self) -> StreamResult<()> {
        StreamDecorator::rewind(self)
    }

    fn tell(&self) -> StreamResult<i64> {
        StreamDecorator::tell(self)
    }

    fn eof(&self) -> bool {
        StreamDecorator::eof(self)
    }

    fn size(&self) -> Option<u64> {
        StreamDecorator::size(self)
    }

    fn is_readable(&self) -> bool {
        StreamDecorator::is_readable(self)
    }

    fn is_writable(&self) -> bool {
        StreamDecorator::is_writable(self)
    }

    fn is_seekable(&self) -> bool {
        StreamDecorator::is_seekable(self)
    }

    fn close(&mut self) -> StreamResult<()> {
        StreamDecorator::close(self)
    }

    fn detach(&mut self) -> StreamResult<Option<Detached>> {
        StreamDecorator::detach(self)
    }

    fn metadata(&self) -> Metadata {
        StreamDecorator::metadata(self)
    }

    fn metadata_value(&self, key: &str) -> Option<String> {
        StreamDecorator::metadata_value(self, key)
    }

    fn to_bytes(&mut self) -> Vec<u8> {
        StreamDecorator::to_bytes(self)
    }
}
