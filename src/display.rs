//! Core display operations

use alloc::string::String;

use crate::buffer::PixelBuffer;
use crate::command::{
    BRIGHTNESS, DRIVER_ADDRESSES, MAX_BRIGHTNESS, MODE, OPTIONS, UPDATE, UPDATE_TRIGGER,
    matrix_register,
};
use crate::config::{Config, Layout, Mirror};
use crate::encoder::{ChipFrames, encode};
use crate::error::{BufferError, Error};
use crate::interface::DisplayInterface;
use crate::text::{self, Spacing};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Driver for one Micro Dot pHAT
///
/// Owns the pixel buffer, the configuration and, once [`open`](Self::open)
/// has been called, the bus session. Drawing works without a session;
/// only [`show`](Self::show) and brightness changes talk to the hardware.
///
/// ## Example
///
/// ```rust,no_run
/// use microdotphat::{Config, Display, Interface, Spacing};
/// # use core::convert::Infallible;
/// # use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
/// # struct MockI2c;
/// # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
/// # impl I2c<SevenBitAddress> for MockI2c {
/// #     fn transaction(
/// #         &mut self,
/// #         _address: u8,
/// #         _operations: &mut [Operation<'_>],
/// #     ) -> Result<(), Self::Error> {
/// #         Ok(())
/// #     }
/// # }
/// let mut display = Display::new(Config::default());
/// if display.open(Interface::new(MockI2c)).is_err() {
///     return;
/// }
///
/// let _ = display.write_string("123456", 0, 0, Spacing::Chip);
/// let _ = display.set_decimal(1, true);
/// let _ = display.set_decimal(3, true);
/// let _ = display.show();
/// ```
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Bus session, present between `open` and `close`
    interface: Option<I>,
    /// Display configuration
    config: Config,
    /// Pixel state drawn by the caller
    buffer: PixelBuffer,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display with a blank buffer and no session
    pub fn new(config: Config) -> Self {
        let buffer = PixelBuffer::new(config.layout.width, config.layout.height);
        Self {
            interface: None,
            config,
            buffer,
        }
    }

    /// Take ownership of the bus and initialize the three drivers
    ///
    /// Each driver gets the configured mode, options and brightness. If a
    /// write fails the session stays open so [`close`](Self::close) can hand
    /// the bus back.
    ///
    /// # Errors
    ///
    /// Returns `Error::AlreadyConnected` with `interface` inside if a session
    /// is already open; the open session is left as it was. Returns
    /// `Error::Interface` if an initialization write fails.
    pub fn open(&mut self, interface: I) -> DisplayResult<I> {
        if self.interface.is_some() {
            log::warn!("Session already open, rejecting new interface");
            return Err(Error::AlreadyConnected(interface));
        }
        self.interface = Some(interface);
        log::debug!(
            "Initializing {} drivers (mode {:#04x}, options {:#04x}, brightness {})",
            DRIVER_ADDRESSES.len(),
            self.config.mode,
            self.config.options,
            self.config.brightness
        );
        for address in DRIVER_ADDRESSES {
            self.write(address, MODE, &[self.config.mode])?;
            self.write(address, OPTIONS, &[self.config.options])?;
            self.write(address, BRIGHTNESS, &[self.config.brightness])?;
        }
        Ok(())
    }

    /// End the session and return the bus
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` if no session is open.
    pub fn close(&mut self) -> core::result::Result<I, Error<I>> {
        let interface = self.interface.take().ok_or(Error::NotConnected)?;
        log::debug!("Session closed");
        Ok(interface)
    }

    /// Whether a session is open
    pub fn is_open(&self) -> bool {
        self.interface.is_some()
    }

    /// Get display configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get display geometry
    pub fn layout(&self) -> &Layout {
        &self.config.layout
    }

    /// Get the pixel buffer
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Get the pixel buffer mutably
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Set mirroring; flip both axes to rotate by 180 degrees
    pub fn set_mirror(&mut self, x: bool, y: bool) {
        self.config.mirror = Mirror { x, y };
    }

    /// Set brightness, clamped to [`MAX_BRIGHTNESS`], and send it to the drivers
    ///
    /// The new level is kept even without a session and is applied by the
    /// next [`open`](Self::open).
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` if no session is open.
    pub fn set_brightness(&mut self, level: u8) -> DisplayResult<I> {
        let level = level.min(MAX_BRIGHTNESS);
        self.config.brightness = level;
        log::debug!("Brightness set to {}", level);
        if self.interface.is_none() {
            return Err(Error::NotConnected);
        }
        for address in DRIVER_ADDRESSES {
            self.write(address, BRIGHTNESS, &[level])?;
        }
        Ok(())
    }

    /// Set brightness from a fraction in `[0.0, 1.0]`
    ///
    /// Values outside the range are clamped.
    pub fn set_brightness_fraction(&mut self, fraction: f32) -> DisplayResult<I> {
        let level = (fraction.clamp(0.0, 1.0) * f32::from(MAX_BRIGHTNESS)) as u8;
        self.set_brightness(level)
    }

    /// Clear the buffer and reset its size, scroll and decimal points
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Light or blank every pixel of the buffer
    pub fn fill(&mut self, lit: bool) {
        self.buffer.fill(lit);
    }

    /// Set one buffer pixel, growing the buffer as needed
    pub fn set_pixel(&mut self, x: i32, y: i32, lit: bool) -> Result<(), BufferError> {
        self.buffer.set_pixel(x, y, lit)
    }

    /// Set a buffer column from `bits`, least significant bit on top
    pub fn set_column(&mut self, x: i32, bits: u8) -> Result<(), BufferError> {
        self.buffer.set_column(x, bits)
    }

    /// Light or clear the decimal point of a matrix
    pub fn set_decimal(&mut self, matrix: usize, lit: bool) -> Result<(), BufferError> {
        self.buffer.set_decimal(matrix, lit)
    }

    /// Scroll the buffer by (dx, dy)
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.buffer.scroll(dx, dy);
    }

    /// Scroll the buffer to (x, y)
    pub fn scroll_to(&mut self, x: i32, y: i32) {
        self.buffer.scroll_to(x, y);
    }

    /// Draw one character at (x, y)
    pub fn write_char(&mut self, c: char, x: i32, y: i32) -> Result<(), BufferError> {
        text::write_char(&mut self.buffer, c, x, y)
    }

    /// Draw a string at (x, y); returns the column after the last character
    pub fn write_string(
        &mut self,
        s: &str,
        x: i32,
        y: i32,
        spacing: Spacing,
    ) -> Result<usize, BufferError> {
        text::write_string(&mut self.buffer, &self.config.layout, s, x, y, spacing)
    }

    /// Draw tiny digits bottom-up on one matrix
    pub fn draw_tiny(&mut self, matrix: usize, s: &str) -> Result<(), BufferError> {
        text::draw_tiny(&mut self.buffer, &self.config.layout, matrix, s)
    }

    /// Encode the visible part of the buffer without sending it
    pub fn frames(&self) -> ChipFrames {
        encode(&self.buffer, &self.config)
    }

    /// Text rendering of what [`show`](Self::show) would light up
    pub fn preview(&self) -> String {
        self.frames().preview(&self.config.layout)
    }

    /// Send the buffer to the display
    ///
    /// Each driver receives its two matrix frames followed by an update
    /// trigger. The buffer is not modified, so a failed refresh can simply
    /// be retried by the caller.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotConnected` if no session is open, or
    /// `Error::Interface` if a bus write fails.
    pub fn show(&mut self) -> DisplayResult<I> {
        let frames = self.frames();
        if self.interface.is_none() {
            return Err(Error::NotConnected);
        }

        for (driver, address) in DRIVER_ADDRESSES.into_iter().enumerate() {
            for matrix in [driver * 2 + 1, driver * 2] {
                let frame = &frames.frames()[matrix];
                log::trace!("Matrix {} -> {:#04x}: {:02x?}", matrix, address, frame);
                self.write(address, matrix_register(matrix), frame)?;
            }
            self.write(address, UPDATE, &[UPDATE_TRIGGER])?;
        }
        Ok(())
    }

    fn write(&mut self, address: u8, register: u8, data: &[u8]) -> DisplayResult<I> {
        let interface = self.interface.as_mut().ok_or(Error::NotConnected)?;
        interface
            .write_register(address, register, data)
            .map_err(|e| {
                log::warn!(
                    "Write to register {:#04x} at {:#04x} failed: {:?}",
                    register,
                    address,
                    e
                );
                Error::Interface(e)
            })
    }
}
