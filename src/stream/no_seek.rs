//! Decorator that prevents a stream from being seeked

use super::{Stream, StreamDecorator, StreamError, StreamResult, Whence};

/// Wraps a stream and rejects every seek
///
/// The wrapped stream is accepted as-is. `seek` and `rewind` fail without
/// reaching it; everything else is forwarded.
#[derive(Debug)]
pub struct NoSeekStream<S> {
    stream: S,
}

impl<S: Stream> NoSeekStream<S> {
    pub fn new(stream: S) -> Self {
        NoSeekStream { stream }
    }

    /// Consumes the decorator, returning the wrapped stream
    pub fn into_inner(self) -> S {
        self.stream
    }

    fn unsupported() -> StreamError {
        StreamError::Unsupported("cannot seek NoSeekStream".to_string())
    }
}

impl<S: Stream> StreamDecorator for NoSeekStream<S> {
    type Inner = S;

    fn inner(&self) -> &S {
        &self.stream
    }

    fn inner_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    fn is_seekable(&self) -> bool {
        false
    }

    fn seek(&mut self, _offset: i64, _whence: Whence) -> StreamResult<()> {
        Err(Self::unsupported())
    }

    fn rewind(&mut self) -> StreamResult<()> {
        Err(Self::unsupported())
    }
}
