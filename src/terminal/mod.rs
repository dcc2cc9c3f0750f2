//! Terminal boundary: the operation stream a frame is emitted as
//!
//! The canvas never writes escape codes itself. It drives an [`Output`]
//! sink; [`CrosstermOutput`] turns the stream into crossterm commands and
//! [`Recorder`] keeps it as data.

mod backend;
mod output;

pub use backend::CrosstermOutput;
pub use output::{Output, OutputOp, Recorder};
