//! Buffer to matrix frame encoding
//!
//! Each IS31FL3730 matrix takes an 8-byte frame, but the board wires
//! neighbouring matrices differently:
//!
//! | Matrix  | Orientation                 | Pixel (lx, y)         | Decimal point  |
//! |---------|-----------------------------|-----------------------|----------------|
//! | even    | [`Orientation::ColumnBytes`] | `frame[lx] \|= 1 << y` | byte 7, bit 6 |
//! | odd     | [`Orientation::RowBytes`]    | `frame[y] \|= 1 << lx` | byte 6, bit 7 |
//!
//! [`encode`] walks every display pixel, maps it through
//! [`translate`](crate::transform::translate) and packs the result into
//! [`ChipFrames`]. The buffer is only read.
//!
//! ## Example
//!
//! ```
//! use microdotphat::{encoder::encode, Config, PixelBuffer};
//!
//! let config = Config::default();
//! let mut buffer = PixelBuffer::new(45, 7);
//! buffer.set_pixel(2, 3, true)?;
//! buffer.set_pixel(9, 1, true)?;
//!
//! let frames = encode(&buffer, &config);
//! assert_eq!(frames.frame(0).map(|f| f[2]), Some(0b0000_1000));
//! assert_eq!(frames.frame(1).map(|f| f[1]), Some(0b0000_0010));
//! # Ok::<(), microdotphat::BufferError>(())
//! ```

use alloc::string::String;

use crate::buffer::PixelBuffer;
use crate::command::MATRIX_COUNT;
use crate::config::{Config, Layout, MATRIX_COLUMNS};
use crate::transform::translate;

/// Bytes per matrix frame
pub const FRAME_LEN: usize = 8;

/// Data block for one matrix
pub type Frame = [u8; FRAME_LEN];

/// Bit packing used by a matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// One byte per column, bit `y` is row `y`
    ColumnBytes,
    /// One byte per row, bit `lx` is column `lx`
    RowBytes,
}

/// Packing of each matrix, left to right
///
/// Alternates with the physical wiring: even matrices are column-packed,
/// odd matrices row-packed.
pub const ORIENTATION: [Orientation; MATRIX_COUNT] = [
    Orientation::ColumnBytes,
    Orientation::RowBytes,
    Orientation::ColumnBytes,
    Orientation::RowBytes,
    Orientation::ColumnBytes,
    Orientation::RowBytes,
];

impl Orientation {
    /// Byte index and bit mask holding local pixel (lx, y)
    ///
    /// Returns `None` when (lx, y) falls outside the 8x8 frame.
    pub fn locate(self, lx: usize, y: usize) -> Option<(usize, u8)> {
        let (index, shift) = match self {
            Self::ColumnBytes => (lx, y),
            Self::RowBytes => (y, lx),
        };
        if index >= FRAME_LEN {
            return None;
        }
        let bit = u32::try_from(shift).ok().and_then(|s| 1u8.checked_shl(s))?;
        Some((index, bit))
    }

    /// Byte index and bit mask holding the decimal point
    pub fn decimal_point(self) -> (usize, u8) {
        match self {
            Self::ColumnBytes => (7, 0b0100_0000),
            Self::RowBytes => (6, 0b1000_0000),
        }
    }
}

/// Encoded frames for all six matrices
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChipFrames {
    frames: [Frame; MATRIX_COUNT],
}

impl ChipFrames {
    /// All frames, left to right
    pub fn frames(&self) -> &[Frame; MATRIX_COUNT] {
        &self.frames
    }

    /// Frame of one matrix
    pub fn frame(&self, matrix: usize) -> Option<&Frame> {
        self.frames.get(matrix)
    }

    /// Whether local pixel (lx, y) of `matrix` is lit
    pub fn is_lit(&self, matrix: usize, lx: usize, y: usize) -> bool {
        let (Some(frame), Some(orientation)) = (self.frames.get(matrix), ORIENTATION.get(matrix))
        else {
            return false;
        };
        let Some((index, bit)) = orientation.locate(lx, y) else {
            return false;
        };
        frame[index] & bit != 0
    }

    /// Whether the decimal point of `matrix` is lit
    pub fn decimal(&self, matrix: usize) -> bool {
        let (Some(frame), Some(orientation)) = (self.frames.get(matrix), ORIENTATION.get(matrix))
        else {
            return false;
        };
        let (index, bit) = orientation.decimal_point();
        frame[index] & bit != 0
    }

    /// Light display pixel (x, y), ignoring coordinates off the display
    pub fn set_pixel(&mut self, layout: &Layout, x: usize, y: usize) {
        if x >= layout.width || y >= layout.height {
            return;
        }
        let (Some(matrix), Some(lx)) = (
            x.checked_div(layout.chip_width),
            x.checked_rem(layout.chip_width),
        ) else {
            return;
        };
        let (Some(frame), Some(orientation)) =
            (self.frames.get_mut(matrix), ORIENTATION.get(matrix))
        else {
            return;
        };
        let Some((index, bit)) = orientation.locate(lx, y) else {
            return;
        };
        frame[index] |= bit;
    }

    /// Light the decimal point of `matrix`, ignoring indices out of range
    pub fn set_decimal(&mut self, matrix: usize) {
        let (Some(frame), Some(orientation)) =
            (self.frames.get_mut(matrix), ORIENTATION.get(matrix))
        else {
            return;
        };
        let (index, bit) = orientation.decimal_point();
        frame[index] |= bit;
    }

    /// Render the expected LED state as text
    ///
    /// One line per display row plus a line for the decimal points. `#` is
    /// a lit LED, `.` an unlit one, and a space marks a position with no
    /// LED behind it.
    pub fn preview(&self, layout: &Layout) -> String {
        let stride = layout.chip_width.max(1);
        let mut out = String::with_capacity((layout.width + 1) * (layout.height + 1));
        for y in 0..=layout.height {
            if y > 0 {
                out.push('\n');
            }
            for x in 0..layout.width {
                let matrix = x / stride;
                let lx = x % stride;
                let c = if y == layout.height {
                    match (lx, self.decimal(matrix)) {
                        (0, true) => '#',
                        (0, false) => '.',
                        _ => ' ',
                    }
                } else if lx >= MATRIX_COLUMNS {
                    ' '
                } else if self.is_lit(matrix, lx, y) {
                    '#'
                } else {
                    '.'
                };
                out.push(c);
            }
        }
        out
    }
}

/// Encode the visible part of `buffer` into matrix frames
pub fn encode(buffer: &PixelBuffer, config: &Config) -> ChipFrames {
    let layout = &config.layout;
    let mut frames = ChipFrames::default();

    for matrix in 0..MATRIX_COUNT {
        for lx in 0..layout.chip_width {
            let x = matrix * layout.chip_width + lx;
            if x >= layout.width {
                break;
            }
            for y in 0..layout.height {
                let (bx, by) = translate(x, y, config.mirror, layout, buffer);
                if buffer.pixel(bx, by) {
                    frames.set_pixel(layout, x, y);
                }
            }
        }
    }

    for matrix in 0..MATRIX_COUNT {
        if buffer.decimal(matrix) {
            frames.set_decimal(matrix);
        }
    }

    frames
}
