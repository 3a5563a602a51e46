pub mod io;
pub mod stream;

pub use io::{IoAdapter, ReaderStream, SeekableReader};
pub use stream::{
    ConcatenatedStream, NoSeekStream, NullStream, Stream, StreamDecorator, StreamError, StreamResult,
    StringStream, Whence,
};
