//! Text rendering into the pixel buffer
//!
//! Characters are drawn with the 5x7 [`font`](crate::font). Each glyph cell
//! is written in full, lit and unlit pixels alike, so redrawing a string
//! over an old one (a ticking clock, say) needs no clear in between.
//!
//! ## Example
//!
//! ```
//! use microdotphat::{text::{write_string, Spacing}, Layout, PixelBuffer};
//!
//! let layout = Layout::MICRO_DOT_PHAT;
//! let mut buffer = PixelBuffer::new(layout.width, layout.height);
//!
//! // One character per matrix
//! let end = write_string(&mut buffer, &layout, "123456", 0, 0, Spacing::Chip)?;
//! assert_eq!(end, 48);
//!
//! // A long kerned message grows the buffer, ready for scrolling
//! buffer.clear();
//! let end = write_string(&mut buffer, &layout, "Hello, world!", 0, 0, Spacing::Kerned)?;
//! assert_eq!(end, 13 * 6);
//! assert!(buffer.width() > layout.width);
//! # Ok::<(), microdotphat::BufferError>(())
//! ```

use crate::buffer::PixelBuffer;
use crate::command::MATRIX_COUNT;
use crate::config::Layout;
use crate::error::BufferError;
use crate::font::{FONT_HEIGHT, FONT_WIDTH, TINY_WIDTH, glyph, tiny_digit};

/// Horizontal advance between characters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Spacing {
    /// Glyph width plus one blank column; best for scrolling text
    Kerned,
    /// One character per matrix
    #[default]
    Chip,
}

impl Spacing {
    /// Columns the cursor moves after a character
    pub fn advance(self, layout: &Layout) -> usize {
        match self {
            Self::Kerned => FONT_WIDTH + 1,
            Self::Chip => layout.chip_width,
        }
    }
}

/// Draw `c` with its top-left corner at (x, y)
///
/// Characters without a glyph are ignored. The buffer grows to fit the
/// whole glyph cell.
///
/// # Errors
///
/// Returns `BufferError::InvalidCoordinate` if `x` or `y` is negative; the
/// buffer is left untouched.
pub fn write_char(buffer: &mut PixelBuffer, c: char, x: i32, y: i32) -> Result<(), BufferError> {
    let (x, y) = PixelBuffer::checked(x, y)?;
    draw_glyph(buffer, c, x, y);
    Ok(())
}

/// Draw `s` left to right starting at (x, y)
///
/// Characters without a glyph are skipped and do not move the cursor.
///
/// # Returns
///
/// The column where the next character would start.
///
/// # Errors
///
/// Returns `BufferError::InvalidCoordinate` if `x` or `y` is negative; the
/// buffer is left untouched.
pub fn write_string(
    buffer: &mut PixelBuffer,
    layout: &Layout,
    s: &str,
    x: i32,
    y: i32,
    spacing: Spacing,
) -> Result<usize, BufferError> {
    let (mut cursor, y) = PixelBuffer::checked(x, y)?;
    let advance = spacing.advance(layout);
    for c in s.chars() {
        if draw_glyph(buffer, c, cursor, y) {
            cursor += advance;
        }
    }
    Ok(cursor)
}

/// Draw digits from `s` in the tiny font, bottom-up on one matrix
///
/// Non-digit characters are dropped. Drawing stops quietly once the top of
/// the display is reached.
///
/// # Errors
///
/// Returns `BufferError::InvalidIndex` if `matrix` is not below
/// [`MATRIX_COUNT`].
pub fn draw_tiny(
    buffer: &mut PixelBuffer,
    layout: &Layout,
    matrix: usize,
    s: &str,
) -> Result<(), BufferError> {
    if matrix >= MATRIX_COUNT {
        return Err(BufferError::InvalidIndex {
            index: matrix,
            limit: MATRIX_COUNT,
        });
    }
    let x = matrix * layout.chip_width;
    let mut y = layout.height;

    for rows in s.chars().filter_map(tiny_digit) {
        for &row in rows {
            let Some(next) = y.checked_sub(1) else {
                return Ok(());
            };
            y = next;
            for i in 0..TINY_WIDTH {
                buffer.set(x + TINY_WIDTH - 1 - i, y, row & (1 << i) != 0);
            }
        }
        // Blank row between digits
        y = y.saturating_sub(1);
    }
    Ok(())
}

/// Draw the glyph cell for `c`; returns whether `c` has a glyph
fn draw_glyph(buffer: &mut PixelBuffer, c: char, x: usize, y: usize) -> bool {
    let Some(columns) = glyph(c) else {
        return false;
    };
    for (gx, &column) in columns.iter().enumerate() {
        for gy in 0..FONT_HEIGHT {
            buffer.set(x + gx, y + gy, column & (1 << gy) != 0);
        }
    }
    true
}
