//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`Interface`] struct
//! for writing IS31FL3730 registers over I2C.
//!
//! ## Hardware Requirements
//!
//! The Micro Dot pHAT only needs the I2C bus (SDA + SCL). The three drivers
//! answer on the addresses listed in [`DRIVER_ADDRESSES`](crate::command::DRIVER_ADDRESSES).
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use microdotphat::{DisplayInterface, Interface};
//! # use core::convert::Infallible;
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
//! // Create interface with an I2C bus
//! let mut interface = Interface::new(MockI2c);
//!
//! // Write the PWM register of the first driver
//! let _ = interface.write_register(0x63, 0x19, &[64]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Highest valid 7-bit I2C address
pub const MAX_ADDRESS: u8 = 0x7F;

/// Trait for the bus connection to the matrix drivers
///
/// This trait abstracts over different hardware implementations,
/// allowing the [`Display`](crate::display::Display) to work with any
/// bus that can deliver a register write to an addressed device.
///
/// ## Implementing
///
/// For most cases, use the provided [`Interface`] struct. Implement this
/// trait yourself to drive the board through a bus multiplexer or to record
/// traffic in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write `data` to `register` on the device at `address`
    ///
    /// The implementation must send the register byte immediately followed
    /// by the data bytes, as one bus write.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus write fails.
    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> InterfaceResult<(), Self::Error>;
}

/// Errors that can occur at the interface level
///
/// Generic over the I2C error type.
#[derive(Debug)]
pub enum InterfaceError<I2cErr> {
    /// I2C communication error
    I2c(I2cErr),
    /// Address does not fit in 7 bits
    InvalidAddress(u8),
}

impl<I2cErr: Debug> core::fmt::Display for InterfaceError<I2cErr> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::I2c(e) => write!(f, "I2C error: {e:?}"),
            Self::InvalidAddress(address) => write!(f, "Invalid I2C address: {address:#04x}"),
        }
    }
}

impl<I2cErr: Debug> core::error::Error for InterfaceError<I2cErr> {}

/// Hardware interface implementation for the IS31FL3730 drivers
///
/// Implements [`DisplayInterface`] for an embedded-hal v1.0 [`I2c`] bus.
///
/// ## Example
///
/// ```rust,no_run
/// use microdotphat::{Config, Display, Interface};
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
/// let interface = Interface::new(MockI2c);
///
/// let mut display = Display::new(Config::default());
/// let _ = display.open(interface);
/// ```
pub struct Interface<I2C> {
    /// I2C bus shared by the three drivers
    i2c: I2C,
}

impl<I2C> Interface<I2C>
where
    I2C: I2c<SevenBitAddress>,
{
    /// Create a new Interface
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for Interface<I2C>
where
    I2C: I2c<SevenBitAddress>,
{
    type Error = InterfaceError<I2C::Error>;

    fn write_register(
        &mut self,
        address: u8,
        register: u8,
        data: &[u8],
    ) -> InterfaceResult<(), Self::Error> {
        if address > MAX_ADDRESS {
            return Err(InterfaceError::InvalidAddress(address));
        }
        // Adjacent writes go out back to back without a repeated start.
        self.i2c
            .transaction(
                address,
                &mut [Operation::Write(&[register]), Operation::Write(data)],
            )
            .map_err(InterfaceError::I2c)
    }
}
