//! Seekable reader trait and the stream built on it
//!
//! `SeekableReader` unifies readers that support both reading and seeking,
//! and `ReaderStream` exposes any of them as a read-only `Stream`.

use std::io::{Read, Seek, SeekFrom};

use log::debug;

use crate::stream::{Detached, Metadata, Stream, StreamError, StreamResult, Whence};

/// Trait for readers that can both read and seek
///
/// This trait combines the Read and Seek traits so files, cursors and
/// other sources can back a `ReaderStream`.
pub trait SeekableReader: Read + Seek + Send + Sync {}

// Blanket implementation for any type that implements the required traits
impl<T: Read + Seek + Send + Sync> SeekableReader for T {}

/// Read-only stream over a `SeekableReader`
///
/// The size is measured once, when the stream is created. Once closed or
/// detached, every operation fails with `StreamError::Detached`.
#[derive(Debug)]
pub struct ReaderStream<R> {
    reader: Option<R>,
    size: Option<u64>,
    position: u64,
    exhausted: bool,
}

impl<R: SeekableReader> ReaderStream<R> {
    /// Wraps `reader`, keeping its current position
    pub fn new(mut reader: R) -> StreamResult<Self> {
        let position = reader.stream_position()?;
        let end = Seek::seek(&mut reader, SeekFrom::End(0))?;
        Seek::seek(&mut reader, SeekFrom::Start(position))?;
        debug!("Reader stream opened at {} of {} bytes", position, end);

        Ok(ReaderStream {
            reader: Some(reader),
            size: Some(end),
            position,
            exhausted: false,
        })
    }

    /// Consumes the stream, returning the reader if still attached
    pub fn into_inner(self) -> Option<R> {
        self.reader
    }

    fn reader_mut(&mut self) -> StreamResult<&mut R> {
        self.reader.as_mut().ok_or(StreamError::Detached)
    }
}

impl<R: SeekableReader + 'static> Stream for ReaderStream<R> {
    fn read(&mut self, length: usize) -> StreamResult<Vec<u8>> {
        let mut result = Vec::new();
        self.reader_mut()?.take(length as u64).read_to_end(&mut result)?;
        self.position += result.len() as u64;
        if result.len() < length {
            self.exhausted = true;
        }
        Ok(result)
    }

    fn contents(&mut self) -> StreamResult<Vec<u8>> {
        let mut result = Vec::new();
        self.reader_mut()?.read_to_end(&mut result)?;
        self.position += result.len() as u64;
        self.exhausted = true;
        Ok(result)
    }

    fn write(&mut self, _data: &[u8]) -> StreamResult<usize> {
        Err(StreamError::Unsupported("cannot write to a read-only stream".to_string()))
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> StreamResult<()> {
        let target = whence.seek_from(offset)?;
        self.position = Seek::seek(self.reader_mut()?, target)?;
        self.exhausted = false;
        Ok(())
    }

    fn rewind(&mut self) -> StreamResult<()> {
        self.seek(0, Whence::Set)
    }

    fn tell(&self) -> StreamResult<i64> {
        if self.reader.is_none() {
            return Err(StreamError::Detached);
        }
        Ok(self.position as i64)
    }

    fn eof(&self) -> bool {
        match (&self.reader, self.size) {
            (None, _) => true,
            (Some(_), Some(size)) => self.exhausted || self.position >= size,
            (Some(_), None) => self.exhausted,
        }
    }

    fn size(&self) -> Option<u64> {
        self.reader.as_ref().and(self.size)
    }

    fn is_readable(&self) -> bool {
        self.reader.is_some()
    }

    fn is_writable(&self) -> bool {
        false
    }

    fn is_seekable(&self) -> bool {
        self.reader.is_some()
    }

    fn close(&mut self) -> StreamResult<()> {
        self.reader = None;
        Ok(())
    }

    fn detach(&mut self) -> StreamResult<Option<Detached>> {
        Ok(self.reader.take().map(|reader| Box::new(reader) as Detached))
    }

    fn metadata(&self) -> Metadata {
        if self.reader.is_none() {
            return Metadata::new();
        }
        let mut metadata = Metadata::new();
        metadata.insert("mode".to_string(), "rb".to_string());
        metadata.insert("seekable".to_string(), "true".to_string());
        metadata
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_reader_stream_reads_and_reports_size() {
        let mut stream = ReaderStream::new(Cursor::new(b"hello world".to_vec())).unwrap();

        assert_eq!(stream.size(), Some(11));
        assert_eq!(stream.read(5).unwrap(), b"hello");
        assert_eq!(stream.tell().unwrap(), 5);
        assert!(!stream.eof());
        assert_eq!(stream.contents().unwrap(), b" world");
        assert!(stream.eof());
    }

    #[test]
    fn test_reader_stream_keeps_initial_position() {
        let mut cursor = Cursor::new(b"abcdef".to_vec());
        cursor.set_position(2);
        let mut stream = ReaderStream::new(cursor).unwrap();

        assert_eq!(stream.tell().unwrap(), 2);
        assert_eq!(stream.read(2).unwrap(), b"cd");
    }

    #[test]
    fn test_reader_stream_seeks_from_end() {
        let mut stream = ReaderStream::new(Cursor::new(b"abcdef".to_vec())).unwrap();

        stream.seek(-2, Whence::End).unwrap();
        assert_eq!(stream.tell().unwrap(), 4);
        assert_eq!(stream.contents().unwrap(), b"ef");

        stream.rewind().unwrap();
        assert!(!stream.eof());
        assert_eq!(stream.read(1).unwrap(), b"a");
    }

    #[test]
    fn test_reader_stream_rejects_negative_absolute_seek() {
        let mut stream = ReaderStream::new(Cursor::new(b"abc".to_vec())).unwrap();

        let result = stream.seek(-1, Whence::Set);
        assert!(matches!(result, Err(StreamError::InvalidArgument(_))));
    }

    #[test]
    fn test_reader_stream_is_read_only() {
        let mut stream = ReaderStream::new(Cursor::new(Vec::new())).unwrap();

        assert!(!stream.is_writable());
        assert!(matches!(stream.write(b"x"), Err(StreamError::Unsupported(_))));
    }

    #[test]
    fn test_detach_returns_reader_and_disables_stream() {
        let mut stream = ReaderStream::new(Cursor::new(b"abc".to_vec())).unwrap();

        let detached = stream.detach().unwrap().expect("reader should be returned");
        let cursor = detached.downcast::<Cursor<Vec<u8>>>().unwrap();
        assert_eq!(cursor.get_ref(), b"abc");

        assert!(matches!(stream.read(1), Err(StreamError::Detached)));
        assert!(matches!(stream.tell(), Err(StreamError::Detached)));
        assert!(stream.eof());
        assert_eq!(stream.size(), None);
        assert!(!stream.is_readable());
        assert!(stream.detach().unwrap().is_none());
    }

    #[test]
    fn test_metadata_describes_open_reader() {
        let mut stream = ReaderStream::new(Cursor::new(b"abc".to_vec())).unwrap();

        assert_eq!(stream.metadata_value("mode").as_deref(), Some("rb"));
        assert_eq!(stream.metadata_value("missing"), None);

        stream.close().unwrap();
        assert!(stream.metadata().is_empty());
    }
}
