//! Reads from multiple streams, one after the other
//!
//! `ConcatenatedStream` is a read-only composite. It keeps the index of the
//! member currently being read and a logical position across all members.
//! Closing, detaching and rewinding fan out to every member.

use log::{debug, warn};

use super::{Detached, Metadata, Stream, StreamError, StreamResult, Whence};

/// Read-only stream over an ordered list of member streams
pub struct ConcatenatedStream {
    streams: Vec<Box<dyn Stream>>,
    seekable: bool,
    current: usize,
    position: u64,
}

impl ConcatenatedStream {
    /// Creates a composite from `streams`
    ///
    /// # Errors
    ///
    /// Returns `StreamError::InvalidArgument` if any stream is not readable.
    /// No composite is built in that case.
    pub fn new<I>(streams: I) -> StreamResult<Self>
    where
        I: IntoIterator<Item = Box<dyn Stream>>,
    {
        let mut concatenated = ConcatenatedStream {
            streams: Vec::new(),
            seekable: true,
            current: 0,
            position: 0,
        };
        for stream in streams {
            concatenated.add_stream(stream)?;
        }
        Ok(concatenated)
    }

    /// Appends a member stream
    ///
    /// A member that cannot seek makes the whole composite non-seekable for
    /// as long as it holds members.
    pub fn add_stream(&mut self, stream: Box<dyn Stream>) -> StreamResult<()> {
        if !stream.is_readable() {
            return Err(StreamError::InvalidArgument("each stream must be readable".to_string()));
        }
        if !stream.is_seekable() {
            self.seekable = false;
        }
        self.streams.push(stream);
        Ok(())
    }

    /// Number of member streams
    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    fn advance(&mut self) {
        self.current += 1;
        debug!("Concatenated stream advanced to member {} of {}", self.current, self.streams.len());
    }

    /// Applies `op` to every member, then drops them all
    ///
    /// Every member is visited even if one fails; the first error is returned.
    fn release<F>(&mut self, mut op: F) -> StreamResult<()>
    where
        F: FnMut(&mut Box<dyn Stream>) -> StreamResult<()>,
    {
        let mut result = Ok(());
        for stream in self.streams.iter_mut() {
            if let Err(e) = op(stream) {
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }
        self.streams.clear();
        self.seekable = true;
        self.current = 0;
        self.position = 0;
        result
    }
}

impl Stream for ConcatenatedStream {
    fn read(&mut self, length: usize) -> StreamResult<Vec<u8>> {
        let mut result = Vec::with_capacity(length.min(8192));

        while result.len() < length && self.current < self.streams.len() {
            let stream = &mut self.streams[self.current];
            let chunk = stream.read(length - result.len())?;
            let at_end = stream.eof();
            let stalled = chunk.is_empty() && !at_end;
            result.extend_from_slice(&chunk);

            if at_end {
                self.advance();
            } else if stalled {
                break;
            }
        }

        self.position += result.len() as u64;
        Ok(result)
    }

    fn contents(&mut self) -> StreamResult<Vec<u8>> {
        let mut result = Vec::new();

        while self.current < self.streams.len() {
            let chunk = self.streams[self.current].contents()?;
            self.position += chunk.len() as u64;
            result.extend_from_slice(&chunk);
            self.advance();
        }

        Ok(result)
    }

    fn write(&mut self, _data: &[u8]) -> StreamResult<usize> {
        Err(StreamError::Unsupported("cannot write to ConcatenatedStream".to_string()))
    }

    /// Seeks to an absolute offset in the logical stream
    ///
    /// Only `Whence::Set` is supported. Members are walked from the first
    /// one, using each member's size to decide how far to skip into it.
    /// Members past the target are rewound. A failed member seek fails the
    /// whole operation and leaves the cursors unspecified.
    fn seek(&mut self, offset: i64, whence: Whence) -> StreamResult<()> {
        if whence != Whence::Set {
            return Err(StreamError::Unsupported(format!(
                "ConcatenatedStream only supports absolute seeks, got {:?}",
                whence
            )));
        }
        if !self.seekable {
            return Err(StreamError::Unsupported("a member of the stream is not seekable".to_string()));
        }
        let target = u64::try_from(offset)
            .map_err(|_| StreamError::InvalidArgument(format!("negative seek offset {}", offset)))?;

        debug!("Seeking concatenated stream to {}", target);
        self.current = 0;
        let mut seek: u64 = 0;

        for index in 0..self.streams.len() {
            let stream = &mut self.streams[index];
            if seek >= target {
                stream.rewind()?;
                continue;
            }

            let size = stream.size().ok_or_else(|| {
                StreamError::Unsupported(format!("member {} has an unknown size", index))
            })?;
            let step = size.min(target - seek);
            stream.seek(step as i64, Whence::Set)?;
            seek += step;

            if stream.eof() {
                self.current = index + 1;
            } else {
                self.current = index;
            }
        }

        self.position = seek;
        Ok(())
    }

    fn rewind(&mut self) -> StreamResult<()> {
        self.position = 0;
        self.current = 0;

        for stream in self.streams.iter_mut() {
            stream.rewind()?;
        }
        Ok(())
    }

    fn tell(&self) -> StreamResult<i64> {
        Ok(self.position as i64)
    }

    /// True once the active member is exhausted and no member follows it
    fn eof(&self) -> bool {
        match self.streams.get(self.current) {
            None => true,
            Some(stream) if !stream.eof() => false,
            Some(_) => self.current + 1 >= self.streams.len(),
        }
    }

    /// Sum of member sizes, unknown if any member size is unknown
    fn size(&self) -> Option<u64> {
        self.streams.iter().map(|stream| stream.size()).sum()
    }

    fn is_readable(&self) -> bool {
        true
    }

    fn is_writable(&self) -> bool {
        false
    }

    fn is_seekable(&self) -> bool {
        self.seekable
    }

    fn close(&mut self) -> StreamResult<()> {
        self.release(|stream| stream.close())
    }

    fn detach(&mut self) -> StreamResult<Option<Detached>> {
        self.release(|stream| stream.detach().map(|_| ()))?;
        Ok(None)
    }

    fn metadata(&self) -> Metadata {
        Metadata::new()
    }

    /// Rewinds every member and drains them
    ///
    /// Any member error is logged and yields an empty buffer.
    fn to_bytes(&mut self) -> Vec<u8> {
        let result = self.rewind().and_then(|_| self.contents());
        match result {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("Failed to convert concatenated stream: {}", e);
                Vec::new()
            }
        }
    }
}
