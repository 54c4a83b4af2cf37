//! IS31FL3730 register and bus address definitions
//!
//! The Micro Dot pHAT carries three IS31FL3730 matrix drivers. Each driver
//! runs two 5x7 LED matrices ("matrix 1" and "matrix 2"), giving six matrices
//! in a row. Every register write is a single I2C write of the register byte
//! followed by its data bytes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use microdotphat::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
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
//! let mut interface = Interface::new(MockI2c);
//!
//! // Full brightness on the first driver
//! let _ = interface.write_register(command::DRIVER_ADDRESSES[0], command::BRIGHTNESS, &[127]);
//!
//! // Latch the matrix registers
//! let _ = interface.write_register(command::DRIVER_ADDRESSES[0], command::UPDATE, &[command::UPDATE_TRIGGER]);
//! ```

/// Number of IS31FL3730 drivers on the board
pub const DRIVER_COUNT: usize = 3;

/// Number of 5x7 LED matrices (two per driver)
pub const MATRIX_COUNT: usize = DRIVER_COUNT * 2;

/// 7-bit I2C addresses of the drivers, left to right
///
/// Driver `d` runs matrices `2d` and `2d + 1`.
pub const DRIVER_ADDRESSES: [u8; DRIVER_COUNT] = [0x63, 0x62, 0x61];

// Registers

/// Configuration register (0x00)
///
/// Selects matrix mode and matrix size. Requires 1 byte.
pub const MODE: u8 = 0x00;

/// Matrix 1 data registers (0x01)
///
/// Start of the matrix 1 data block. Takes up to 11 bytes, the board uses 8.
pub const MATRIX_1: u8 = 0x01;

/// Update column register (0x0C)
///
/// Writing any value latches both matrix data blocks onto the LEDs.
pub const UPDATE: u8 = 0x0C;

/// Lighting effect register (0x0D)
///
/// Audio gain and row drive current. Requires 1 byte.
pub const OPTIONS: u8 = 0x0D;

/// Matrix 2 data registers (0x0E)
///
/// Start of the matrix 2 data block. Takes up to 11 bytes, the board uses 8.
pub const MATRIX_2: u8 = 0x0E;

/// PWM register (0x19)
///
/// Global brightness, 0 to 127 for the range used by this driver.
pub const BRIGHTNESS: u8 = 0x19;

// Register values

/// Configuration value: matrix 1 and 2 enabled, 8x8 matrix addressing
pub const DEFAULT_MODE: u8 = 0b0001_1000;

/// Lighting effect value: 35mA row current
pub const DEFAULT_OPTIONS: u8 = 0b0000_1110;

/// Highest PWM value sent to the drivers
pub const MAX_BRIGHTNESS: u8 = 127;

/// Byte written to [`UPDATE`] to latch the matrix data
pub const UPDATE_TRIGGER: u8 = 0x01;

/// Bus address of the driver that runs `matrix`
///
/// Returns `None` for matrices outside `0..MATRIX_COUNT`.
pub fn driver_address(matrix: usize) -> Option<u8> {
    DRIVER_ADDRESSES.get(matrix / 2).copied()
}

/// Data register that holds the frame of `matrix` on its driver
///
/// Odd matrices sit in the driver's matrix 1 block, even ones in matrix 2.
pub fn matrix_register(matrix: usize) -> u8 {
    if matrix % 2 == 1 { MATRIX_1 } else { MATRIX_2 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_address_pairs_matrices() {
        assert_eq!(driver_address(0), Some(0x63));
        assert_eq!(driver_address(1), Some(0x63));
        assert_eq!(driver_address(2), Some(0x62));
        assert_eq!(driver_address(5), Some(0x61));
        assert_eq!(driver_address(6), None);
    }

    #[test]
    fn test_matrix_register_by_parity() {
        assert_eq!(matrix_register(0), MATRIX_2);
        assert_eq!(matrix_register(1), MATRIX_1);
        assert_eq!(matrix_register(4), MATRIX_2);
        assert_eq!(matrix_register(5), MATRIX_1);
    }
}
