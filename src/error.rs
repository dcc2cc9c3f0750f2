//! Render-core error type

use std::io;
use thiserror::Error;

/// Errors raised by the canvas, layout and widgets
///
/// Clipping and undecodable glyphs are not errors: they are truncated or
/// drawn as width 1. Everything listed here is reported to the immediate
/// caller and never retried.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The canvas grids could not be allocated
    #[error("Failed to allocate a {width}x{height} canvas")]
    Allocation { width: u16, height: u16 },

    /// A bordered widget needs at least 3x3 cells
    #[error("Bordered area {width}x{height} is smaller than 3x3")]
    AreaTooSmall { width: u16, height: u16 },

    /// The output sink failed
    #[error("Failed to write to the terminal: {0}")]
    Io(#[from] io::Error),
}

impl RenderError {
    /// Check whether this error came from the output sink
    pub fn is_io(&self) -> bool {
        matches!(self, RenderError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = RenderError::AreaTooSmall { width: 2, height: 5 };
        assert_eq!(err.to_string(), "Bordered area 2x5 is smaller than 3x3");

        let err = RenderError::Allocation { width: 80, height: 24 };
        assert_eq!(err.to_string(), "Failed to allocate a 80x24 canvas");
    }

    #[test]
    fn test_io_conversion() {
        let err: RenderError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(err.is_io());
    }
}
