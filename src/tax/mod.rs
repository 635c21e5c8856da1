//! Tax computations: GST math and legal amount-in-words text

pub mod gst;
pub mod words;

pub use gst::*;
pub use words::*;
