//! Scripted stream used to observe how adapters drive their members

use std::cell::RefCell;
use std::rc::Rc;

use crate::stream::{Detached, Metadata, Stream, StreamError, StreamResult, StringStream, Whence};

/// Shared record of the calls made on scripted streams
pub type CallLog = Rc<RefCell<Vec<String>>>;

pub fn call_log() -> CallLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// In-memory stream with switchable capabilities and failures
///
/// Data handling is delegated to a `StringStream`; every call is recorded
/// in the shared log as `"<name>.<operation>"`.
pub struct ScriptedStream {
    name: String,
    data: StringStream,
    log: CallLog,
    pub readable: bool,
    pub seekable: bool,
    pub size_known: bool,
    pub fail_contents: bool,
    pub fail_seek: bool,
}

impl ScriptedStream {
    pub fn new(name: &str, data: &str, log: &CallLog) -> Self {
        ScriptedStream {
            name: name.to_string(),
            data: StringStream::new(data),
            log: Rc::clone(log),
            readable: true,
            seekable: true,
            size_known: true,
            fail_contents: false,
            fail_seek: false,
        }
    }

    pub fn boxed(self) -> Box<dyn Stream> {
        Box::new(self)
    }

    fn record(&self, operation: &str) {
        self.log.borrow_mut().push(format!("{}.{}", self.name, operation));
    }
}

impl Stream for ScriptedStream {
    fn read(&mut self, length: usize) -> StreamResult<Vec<u8>> {
        self.record("read");
        self.data.read(length)
    }

    fn contents(&mut self) -> StreamResult<Vec<u8>> {
        self.record("contents");
        if self.fail_contents {
            return Err(StreamError::GenericError("contents failed".to_string()));
        }
        self.data.contents().map(|bytes| {
            let _ = self.data.seek(0, Whence::End);
            bytes
        })
    }

    fn write(&mut self, data: &[u8]) -> StreamResult<usize> {
        self.record("write");
        self.data.write(data)
    }

    fn seek(&mut self, offset: i64, whence: Whence) -> StreamResult<()> {
        self.record("seek");
        if self.fail_seek {
            return Err(StreamError::GenericError("seek failed".to_string()));
        }
        self.data.seek(offset, whence)
    }

    fn rewind(&mut self) -> StreamResult<()> {
        self.record("rewind");
        self.data.rewind()
    }

    fn tell(&self) -> StreamResult<i64> {
        self.data.tell()
    }

    fn eof(&self) -> bool {
        self.data.eof()
    }

    fn size(&self) -> Option<u64> {
        if self.size_known {
            self.data.size()
        } else {
            None
        }
    }

    fn is_readable(&self) -> bool {
        self.readable
    }

    fn is_writable(&self) -> bool {
        true
    }

    fn is_seekable(&self) -> bool {
        self.seekable
    }

    fn close(&mut self) -> StreamResult<()> {
        self.record("close");
        Ok(())
    }

    fn detach(&mut self) -> StreamResult<Option<Detached>> {
        self.record("detach");
        Ok(None)
    }

    fn metadata(&self) -> Metadata {
        let mut metadata = Metadata::new();
        metadata.insert("name".to_string(), self.name.clone());
        metadata
    }
}

/// Returns the logged calls for one operation, in order
pub fn calls_of(log: &CallLog, operation: &str) -> Vec<String> {
    let suffix = format!(".{}", operation);
    log.borrow().iter().filter(|call| call.ends_with(&suffix)).cloned().collect()
}
