//! Micro Dot pHAT LED Matrix Driver
//!
//! A driver for the Pimoroni Micro Dot pHAT: six 5x7 LED matrices run by
//! three IS31FL3730 drivers on an I2C bus.
//!
//! The board is addressed as one bitmap. Drawing goes into an auto-growing
//! [`PixelBuffer`] that can be scrolled with wrap-around; [`Display::show`]
//! maps the visible window onto the six matrices, taking care of the
//! alternating bit orientation of neighbouring matrices, and sends the frames.
//!
//! ## Features
//!
//! - `no_std` compatible (needs `alloc`)
//! - `embedded-hal` v1.0 I2C support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Built-in 5x7 font and tiny digits
//! - Scrolling, mirroring and 180 degree rotation
//! - Decimal points and brightness control
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use microdotphat::{Builder, Display, Interface, Spacing};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let config = Builder::new().rotate_180().brightness(64).build();
//! let mut display = Display::new(config);
//! if display.open(Interface::new(i2c)).is_err() {
//!     return;
//! }
//!
//! // Scroll a message across the display
//! let end = match display.write_string("Hello, world! ", 0, 0, Spacing::Kerned) {
//!     Ok(end) => end,
//!     Err(_) => return,
//! };
//! for _ in 0..end {
//!     let _ = display.show();
//!     display.scroll(1, 0);
//! }
//! ```

#![no_std]

extern crate alloc;

/// Pixel buffer with growth, scrolling and decimal points
pub mod buffer;
/// IS31FL3730 registers and bus addresses
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Buffer to matrix frame encoding
pub mod encoder;
/// Error types for the driver
pub mod error;
/// Built-in fonts
pub mod font;
/// Hardware interface abstraction
pub mod interface;
/// Text rendering
pub mod text;
/// Display to buffer coordinate mapping
pub mod transform;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use buffer::PixelBuffer;
pub use config::{Builder, Config, Layout, Mirror};
pub use display::Display;
pub use encoder::{ChipFrames, Frame, Orientation};
pub use error::{BufferError, BuilderError, Error};
pub use interface::{DisplayInterface, Interface, InterfaceError};
pub use text::Spacing;
