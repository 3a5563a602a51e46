//! `std::io` view of a `Stream`
//!
//! `IoAdapter` borrows a stream and implements `Read`, `Write` and `Seek`
//! on top of it, so std consumers and extension traits can drive any
//! adapter in this crate.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::stream::{Stream, Whence};

/// Borrowing `Read + Write + Seek` wrapper around a stream
pub struct IoAdapter<'a, S: Stream + ?Sized> {
    stream: &'a mut S,
}

impl<'a, S: Stream + ?Sized> IoAdapter<'a, S> {
    pub fn new(stream: &'a mut S) -> Self {
        IoAdapter { stream }
    }

    pub fn get_ref(&self) -> &S {
        &*self.stream
    }

    pub fn get_mut(&mut self) -> &mut S {
        &mut *self.stream
    }
}

impl<S: Stream + ?Sized> Read for IoAdapter<'_, S> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let data = Stream::read(&mut *self.stream, buf.len())?;
        let n = data.len().min(buf.len());
        buf[..n].copy_from_slice(&data[..n]);
        Ok(n)
    }
}

impl<S: Stream + ?Sized> Write for IoAdapter<'_, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Stream::write(&mut *self.stream, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: Stream + ?Sized> Seek for IoAdapter<'_, S> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (offset, whence) = match pos {
            SeekFrom::Start(offset) => {
                let offset = i64::try_from(offset)
                    .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "seek offset overflows i64"))?;
                (offset, Whence::Set)
            }
            SeekFrom::Current(offset) => (offset, Whence::Current),
            SeekFrom::End(offset) => (offset, Whence::End),
        };
        let previous = Stream::tell(&*self.stream)?;
        Stream::seek(&mut *self.stream, offset, whence)?;

        let position = Stream::tell(&*self.stream)?;
        match u64::try_from(position) {
            Ok(position) => Ok(position),
            Err(_) => {
                // Put the cursor back where it was before failing
                Stream::seek(&mut *self.stream, previous, Whence::Set)?;
                Err(io::Error::new(io::ErrorKind::InvalidInput, "seek to a negative position"))
            }
        }
    }
}
