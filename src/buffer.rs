//! Auto-growing pixel buffer
//!
//! [`PixelBuffer`] holds the on/off state the caller draws into. It starts
//! out display-sized and grows to the right and downwards whenever a pixel
//! beyond its bounds is set, so text longer than the display can be written
//! once and then scrolled through.
//!
//! Cells are stored row-major in a flat vector; width and height are tracked
//! separately and every resize rebuilds the vector so rows never go ragged.
//!
//! ## Example
//!
//! ```
//! use microdotphat::PixelBuffer;
//!
//! let mut buffer = PixelBuffer::new(45, 7);
//! buffer.set_pixel(60, 2, true)?;
//! assert_eq!((buffer.width(), buffer.height()), (61, 7));
//! assert!(buffer.pixel(60, 2));
//!
//! buffer.scroll(-1, 0);
//! assert_eq!(buffer.scroll_offset(), (60, 0));
//!
//! buffer.clear();
//! assert_eq!((buffer.width(), buffer.height()), (45, 7));
//! # Ok::<(), microdotphat::BufferError>(())
//! ```

use alloc::vec;
use alloc::vec::Vec;

use crate::command::MATRIX_COUNT;
use crate::error::BufferError;

/// Growable on/off pixel grid with scroll offsets and decimal points
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Row-major cells, `width * height` long
    cells: Vec<bool>,
    width: usize,
    height: usize,
    display_width: usize,
    display_height: usize,
    scroll_x: usize,
    scroll_y: usize,
    decimals: [bool; MATRIX_COUNT],
}

/// Euclidean remainder of `value` by `modulus`
///
/// Always lands in `0..modulus`, whatever the sign of `value`. `modulus`
/// must be non-zero.
pub fn pos_mod(value: i64, modulus: usize) -> usize {
    value.rem_euclid(modulus as i64) as usize
}

impl PixelBuffer {
    /// Create a blank buffer the size of the display
    ///
    /// Zero dimensions are bumped to one so scroll arithmetic always has a
    /// non-zero modulus.
    pub fn new(display_width: usize, display_height: usize) -> Self {
        let display_width = display_width.max(1);
        let display_height = display_height.max(1);
        Self {
            cells: vec![false; display_width * display_height],
            width: display_width,
            height: display_height,
            display_width,
            display_height,
            scroll_x: 0,
            scroll_y: 0,
            decimals: [false; MATRIX_COUNT],
        }
    }

    /// Current buffer width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Current buffer height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Display size the buffer was created with
    pub fn display_size(&self) -> (usize, usize) {
        (self.display_width, self.display_height)
    }

    /// Current scroll offsets, always within the buffer bounds
    pub fn scroll_offset(&self) -> (usize, usize) {
        (self.scroll_x, self.scroll_y)
    }

    /// State of the pixel at (x, y); `false` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.cells[y * self.width + x]
    }

    /// State of the decimal point of matrix `index`; `false` when out of range
    pub fn decimal(&self, index: usize) -> bool {
        self.decimals.get(index).copied().unwrap_or(false)
    }

    /// Set the pixel at (x, y), growing the buffer as needed
    ///
    /// # Errors
    ///
    /// Returns `BufferError::InvalidCoordinate` if `x` or `y` is negative.
    pub fn set_pixel(&mut self, x: i32, y: i32, lit: bool) -> Result<(), BufferError> {
        let (ux, uy) = Self::checked(x, y)?;
        self.set(ux, uy, lit);
        Ok(())
    }

    /// Set an already validated pixel, growing the buffer as needed
    pub(crate) fn set(&mut self, x: usize, y: usize, lit: bool) {
        self.grow_to(x + 1, y + 1);
        let width = self.width;
        self.cells[y * width + x] = lit;
    }

    /// Set a whole column from the low bits of `bits`
    ///
    /// Bit 0 is the top row. Only the display height is written, so this is
    /// mostly useful when not scrolling vertically. Rows 8 and up are
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::InvalidCoordinate` if `x` is negative.
    pub fn set_column(&mut self, x: i32, bits: u8) -> Result<(), BufferError> {
        let (ux, _) = Self::checked(x, 0)?;
        let rows = self.display_height;
        self.grow_to(ux + 1, rows);
        for y in 0..rows {
            let width = self.width;
            let lit = u8::checked_shl(1, y as u32).is_some_and(|mask| bits & mask != 0);
            self.cells[y * width + ux] = lit;
        }
        Ok(())
    }

    /// Light or clear the decimal point of matrix `index`
    ///
    /// # Errors
    ///
    /// Returns `BufferError::InvalidIndex` if `index` is not below
    /// [`MATRIX_COUNT`].
    pub fn set_decimal(&mut self, index: usize, lit: bool) -> Result<(), BufferError> {
        let slot = self
            .decimals
            .get_mut(index)
            .ok_or(BufferError::InvalidIndex {
                index,
                limit: MATRIX_COUNT,
            })?;
        *slot = lit;
        Ok(())
    }

    /// Set every existing cell to `lit` without growing
    pub fn fill(&mut self, lit: bool) {
        self.cells.fill(lit);
    }

    /// Reset cells, decimal points, size and scroll to their initial state
    pub fn clear(&mut self) {
        self.width = self.display_width;
        self.height = self.display_height;
        self.cells.clear();
        self.cells.resize(self.width * self.height, false);
        self.decimals = [false; MATRIX_COUNT];
        self.scroll_x = 0;
        self.scroll_y = 0;
    }

    /// Move the scroll offsets by (dx, dy), wrapping around the buffer
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        self.scroll_x = pos_mod(self.scroll_x as i64 + i64::from(dx), self.width);
        self.scroll_y = pos_mod(self.scroll_y as i64 + i64::from(dy), self.height);
    }

    /// Set the scroll offsets, wrapping around the buffer
    pub fn scroll_to(&mut self, x: i32, y: i32) {
        self.scroll_x = pos_mod(i64::from(x), self.width);
        self.scroll_y = pos_mod(i64::from(y), self.height);
    }

    /// Convert signed coordinates, rejecting negative ones
    pub(crate) fn checked(x: i32, y: i32) -> Result<(usize, usize), BufferError> {
        match (usize::try_from(x), usize::try_from(y)) {
            (Ok(ux), Ok(uy)) => Ok((ux, uy)),
            _ => Err(BufferError::InvalidCoordinate { x, y }),
        }
    }

    /// Grow to at least `width` x `height`, keeping cells at their coordinates
    fn grow_to(&mut self, width: usize, height: usize) {
        let new_width = self.width.max(width);
        let new_height = self.height.max(height);
        if new_width == self.width && new_height == self.height {
            return;
        }

        if new_width == self.width {
            // Appending rows keeps row-major indices intact.
            self.cells.resize(new_width * new_height, false);
        } else {
            let mut cells = vec![false; new_width * new_height];
            for (y, row) in self.cells.chunks_exact(self.width).enumerate() {
                cells[y * new_width..y * new_width + self.width].copy_from_slice(row);
            }
            self.cells = cells;
        }
        self.width = new_width;
        self.height = new_height;

        debug_assert_eq!(self.cells.len(), self.width * self.height);
        debug_assert!(self.width >= self.display_width && self.height >= self.display_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_display_sized_and_blank() {
        let buffer = PixelBuffer::new(45, 7);
        assert_eq!((buffer.width(), buffer.height()), (45, 7));
        assert_eq!(buffer.scroll_offset(), (0, 0));
        for x in 0..45 {
            for y in 0..7 {
                assert!(!buffer.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_set_pixel_reads_back() {
        let mut buffer = PixelBuffer::new(45, 7);
        for &(x, y) in &[(0, 0), (44, 6), (12, 3)] {
            buffer.set_pixel(x, y, true).unwrap();
            assert!(buffer.pixel(x as usize, y as usize));
        }
        buffer.set_pixel(12, 3, false).unwrap();
        assert!(!buffer.pixel(12, 3));
    }

    #[test]
    fn test_set_pixel_grows_and_preserves() {
        let mut buffer = PixelBuffer::new(45, 7);
        buffer.set_pixel(3, 2, true).unwrap();
        buffer.set_pixel(44, 6, true).unwrap();

        buffer.set_pixel(100, 20, true).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (101, 21));
        assert!(buffer.pixel(3, 2));
        assert!(buffer.pixel(44, 6));
        assert!(buffer.pixel(100, 20));
        assert!(!buffer.pixel(45, 6));
        assert!(!buffer.pixel(3, 20));
    }

    #[test]
    fn test_grow_height_only_preserves() {
        let mut buffer = PixelBuffer::new(4, 2);
        buffer.set_pixel(3, 1, true).unwrap();
        buffer.set_pixel(0, 5, true).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (4, 6));
        assert!(buffer.pixel(3, 1));
        assert!(buffer.pixel(0, 5));
    }

    #[test]
    fn test_growth_is_monotonic() {
        let mut buffer = PixelBuffer::new(45, 7);
        buffer.set_pixel(50, 0, true).unwrap();
        buffer.set_pixel(0, 9, true).unwrap();
        buffer.set_pixel(2, 2, true).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (51, 10));
    }

    #[test]
    fn test_negative_coordinates_rejected_without_change() {
        let mut buffer = PixelBuffer::new(45, 7);
        let before = buffer.clone();
        assert_eq!(
            buffer.set_pixel(-1, 3, true),
            Err(BufferError::InvalidCoordinate { x: -1, y: 3 })
        );
        assert_eq!(
            buffer.set_pixel(100, -2, true),
            Err(BufferError::InvalidCoordinate { x: 100, y: -2 })
        );
        assert_eq!(
            buffer.set_column(-5, 0xFF),
            Err(BufferError::InvalidCoordinate { x: -5, y: 0 })
        );
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut buffer = PixelBuffer::new(45, 7);
        buffer.set_pixel(80, 12, true).unwrap();
        buffer.set_decimal(3, true).unwrap();
        buffer.scroll(10, 4);
        buffer.fill(true);

        buffer.clear();
        assert_eq!((buffer.width(), buffer.height()), (45, 7));
        assert_eq!(buffer.scroll_offset(), (0, 0));
        assert!(!buffer.decimal(3));
        assert_eq!(buffer, PixelBuffer::new(45, 7));
    }

    #[test]
    fn test_fill_does_not_grow() {
        let mut buffer = PixelBuffer::new(10, 3);
        buffer.fill(true);
        assert_eq!((buffer.width(), buffer.height()), (10, 3));
        assert!(buffer.pixel(9, 2));
        assert!(!buffer.pixel(10, 2));
        buffer.fill(false);
        assert!(!buffer.pixel(9, 2));
    }

    #[test]
    fn test_set_column_lsb_is_top() {
        let mut buffer = PixelBuffer::new(45, 7);
        buffer.set_column(4, 0b0100_0101).unwrap();
        let column: alloc::vec::Vec<bool> = (0..7).map(|y| buffer.pixel(4, y)).collect();
        assert_eq!(
            column,
            alloc::vec![true, false, true, false, false, false, true]
        );
    }

    #[test]
    fn test_set_column_clears_rows_past_eight() {
        let mut buffer = PixelBuffer::new(4, 10);
        buffer.fill(true);
        buffer.set_column(0, 0).unwrap();
        assert!((0..10).all(|y| !buffer.pixel(0, y)));

        buffer.set_column(1, 0xFF).unwrap();
        assert!((0..8).all(|y| buffer.pixel(1, y)));
        assert!(!buffer.pixel(1, 8));
        assert!(!buffer.pixel(1, 9));
    }

    #[test]
    fn test_set_column_grows_width() {
        let mut buffer = PixelBuffer::new(45, 7);
        buffer.set_column(50, 0x7F).unwrap();
        assert_eq!(buffer.width(), 51);
        assert!(buffer.pixel(50, 6));
    }

    #[test]
    fn test_set_decimal_out_of_range() {
        let mut buffer = PixelBuffer::new(45, 7);
        buffer.set_decimal(5, true).unwrap();
        assert_eq!(
            buffer.set_decimal(6, true),
            Err(BufferError::InvalidIndex { index: 6, limit: 6 })
        );
        assert!(buffer.decimal(5));
        assert!((0..5).all(|i| !buffer.decimal(i)));
    }

    #[test]
    fn test_scroll_wraps_negative() {
        let mut buffer = PixelBuffer::new(45, 7);
        buffer.scroll(-1, -1);
        assert_eq!(buffer.scroll_offset(), (44, 6));
        buffer.scroll(-90, 14);
        assert_eq!(buffer.scroll_offset(), (44, 6));
        buffer.scroll_to(-46, 15);
        assert_eq!(buffer.scroll_offset(), (44, 1));
    }

    #[test]
    fn test_scroll_composes_like_single_reduction() {
        let deltas = [-200, -46, -45, -1, 0, 1, 7, 44, 45, 91, 1000];
        for &start in &[-3, 0, 12, 44] {
            for &dx in &deltas {
                for &dy in &deltas {
                    let mut stepped = PixelBuffer::new(45, 7);
                    stepped.scroll_to(start, start);
                    stepped.scroll(dx, dy);

                    let mut direct = PixelBuffer::new(45, 7);
                    direct.scroll_to(start + dx, start + dy);

                    assert_eq!(stepped.scroll_offset(), direct.scroll_offset());
                }
            }
        }
    }

    #[test]
    fn test_scroll_uses_grown_size() {
        let mut buffer = PixelBuffer::new(45, 7);
        buffer.set_pixel(59, 0, true).unwrap();
        buffer.scroll(50, 0);
        assert_eq!(buffer.scroll_offset(), (50, 0));
        buffer.scroll(20, 0);
        assert_eq!(buffer.scroll_offset(), (10, 0));
    }

    #[test]
    fn test_pos_mod() {
        assert_eq!(pos_mod(-1, 45), 44);
        assert_eq!(pos_mod(-45, 45), 0);
        assert_eq!(pos_mod(46, 45), 1);
        assert_eq!(pos_mod(0, 1), 0);
    }
}
