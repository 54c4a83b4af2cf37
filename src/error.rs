//! Error types for the driver
//!
//! This module defines error types for layout validation ([`BuilderError`]),
//! pixel buffer operations ([`BufferError`]) and bus operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during layout construction
//! - [`BufferError`] - Invalid coordinates or indices passed to the pixel buffer
//! - [`Error`] - Runtime errors while talking to the drivers
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level I2C errors
//!
//! ## Example
//!
//! ```
//! use microdotphat::{BufferError, BuilderError, Layout, PixelBuffer};
//!
//! // Wider than six 8-column chips
//! let result = Layout::new(49, 7, 8);
//! assert!(matches!(result, Err(BuilderError::InvalidLayout { .. })));
//!
//! // Negative coordinates are rejected
//! let mut buffer = PixelBuffer::new(45, 7);
//! let result = buffer.set_pixel(-1, 0, true);
//! assert_eq!(result, Err(BufferError::InvalidCoordinate { x: -1, y: 0 }));
//! ```

use crate::interface::DisplayInterface;

/// Errors raised by pixel buffer and text operations
///
/// These indicate a caller bug. The buffer is never modified when one of
/// these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BufferError {
    /// A coordinate was negative
    InvalidCoordinate {
        /// X coordinate requested
        x: i32,
        /// Y coordinate requested
        y: i32,
    },
    /// A matrix index was outside `0..limit`
    InvalidIndex {
        /// Index requested
        index: usize,
        /// Number of valid indices
        limit: usize,
    },
}

impl core::fmt::Display for BufferError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidCoordinate { x, y } => write!(f, "Invalid coordinate: ({x}, {y})"),
            Self::InvalidIndex { index, limit } => {
                write!(f, "Invalid index {index}, expected 0..{limit}")
            }
        }
    }
}

impl core::error::Error for BufferError {}

/// Errors that can occur when talking to the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying transport error from the [`DisplayInterface`]
    /// implementation. Never retried by the driver.
    Interface(I::Error),
    /// No session is open
    ///
    /// [`Display::open()`](crate::display::Display::open) must be called first.
    NotConnected,
    /// A session is already open
    ///
    /// Carries the interface passed to the rejected
    /// [`Display::open()`](crate::display::Display::open) call.
    AlreadyConnected(I),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::NotConnected => write!(f, "I2C bus connection not open"),
            Self::AlreadyConnected(_) => write!(f, "I2C bus connection already open"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building a layout
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid layout dimensions
    ///
    /// See [`Layout::new()`](crate::config::Layout::new) for constraints.
    InvalidLayout {
        /// Display width requested
        width: usize,
        /// Display height requested
        height: usize,
        /// Columns per chip requested
        chip_width: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLayout {
                width,
                height,
                chip_width,
            } => write!(
                f,
                "Invalid layout {width}x{height} with {chip_width}-column chips (height max {}, chip width max {}, width max 6 chips)",
                crate::config::MAX_HEIGHT,
                crate::config::MAX_CHIP_WIDTH
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_buffer_error_display() {
        let err = BufferError::InvalidCoordinate { x: -3, y: 2 };
        assert_eq!(err.to_string(), "Invalid coordinate: (-3, 2)");

        let err = BufferError::InvalidIndex { index: 6, limit: 6 };
        assert_eq!(err.to_string(), "Invalid index 6, expected 0..6");
    }
}
