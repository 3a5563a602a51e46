//! Bridges between `Stream` and `std::io`
//!
//! This module exposes std readers as streams and streams as std
//! readers/writers/seekers.

pub mod seekable;
pub mod adapter;

pub use adapter::IoAdapter;
pub use seekable::{ReaderStream, SeekableReader};
