//! Display-to-buffer coordinate mapping
//!
//! Every displayed pixel is looked up in the [`PixelBuffer`] through
//! [`translate`]: mirroring is applied in display space first, then the
//! scroll offsets are added and the result wraps around the buffer, so
//! scrolling past the end of a long message brings its start back in view.
//!
//! ## Example
//!
//! ```
//! use microdotphat::{transform::translate, Layout, Mirror, PixelBuffer};
//!
//! let layout = Layout::MICRO_DOT_PHAT;
//! let mut buffer = PixelBuffer::new(layout.width, layout.height);
//!
//! // No mirroring, no scroll: identity
//! assert_eq!(translate(3, 2, Mirror::NONE, &layout, &buffer), (3, 2));
//!
//! // Upside down: the top-left LED shows the bottom-right pixel
//! assert_eq!(translate(0, 0, Mirror::ROTATE_180, &layout, &buffer), (44, 6));
//!
//! // Scrolled one column left: the last LED shows column 0
//! buffer.scroll(1, 0);
//! assert_eq!(translate(44, 0, Mirror::NONE, &layout, &buffer), (0, 0));
//! ```

use crate::buffer::{PixelBuffer, pos_mod};
use crate::config::{Layout, Mirror};

/// Map display coordinates to buffer coordinates
///
/// # Arguments
///
/// * `x` - Display column, 0 to `layout.width - 1`
/// * `y` - Display row, 0 to `layout.height - 1`
/// * `mirror` - Mirroring applied in display space
/// * `layout` - Display geometry
/// * `buffer` - Source of the scroll offsets and wrap-around size
///
/// # Returns
///
/// Buffer coordinates, always inside `buffer.width()` x `buffer.height()`.
pub fn translate(
    x: usize,
    y: usize,
    mirror: Mirror,
    layout: &Layout,
    buffer: &PixelBuffer,
) -> (usize, usize) {
    let mut x = x as i64;
    let mut y = y as i64;
    if mirror.x {
        x = (layout.width as i64 - 1) - x;
    }
    if mirror.y {
        y = (layout.height as i64 - 1) - y;
    }
    let (scroll_x, scroll_y) = buffer.scroll_offset();
    (
        pos_mod(x + scroll_x as i64, buffer.width()),
        pos_mod(y + scroll_y as i64, buffer.height()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(layout: &Layout) -> PixelBuffer {
        PixelBuffer::new(layout.width, layout.height)
    }

    #[test]
    fn test_identity_without_scroll_or_mirror() {
        let layout = Layout::MICRO_DOT_PHAT;
        let mut buf = buffer(&layout);
        buf.set_pixel(60, 9, false).unwrap();
        for x in 0..buf.width() {
            for y in 0..buf.height() {
                assert_eq!(translate(x, y, Mirror::NONE, &layout, &buf), (x, y));
            }
        }
    }

    #[test]
    fn test_mirror_x() {
        let layout = Layout::MICRO_DOT_PHAT;
        let buf = buffer(&layout);
        let mirror = Mirror { x: true, y: false };
        assert_eq!(translate(0, 3, mirror, &layout, &buf), (44, 3));
        assert_eq!(translate(44, 3, mirror, &layout, &buf), (0, 3));
    }

    #[test]
    fn test_mirror_y() {
        let layout = Layout::COMPACT;
        let buf = buffer(&layout);
        let mirror = Mirror { x: false, y: true };
        assert_eq!(translate(5, 0, mirror, &layout, &buf), (5, 6));
        assert_eq!(translate(5, 6, mirror, &layout, &buf), (5, 0));
    }

    #[test]
    fn test_scroll_wraps_around_buffer() {
        let layout = Layout::MICRO_DOT_PHAT;
        let mut buf = buffer(&layout);
        buf.scroll_to(-2, 3);
        assert_eq!(translate(0, 0, Mirror::NONE, &layout, &buf), (43, 3));
        assert_eq!(translate(2, 4, Mirror::NONE, &layout, &buf), (0, 0));
    }

    #[test]
    fn test_mirror_uses_display_size_scroll_uses_buffer_size() {
        let layout = Layout::MICRO_DOT_PHAT;
        let mut buf = buffer(&layout);
        buf.set_pixel(89, 0, true).unwrap();
        buf.scroll_to(50, 0);
        let mirror = Mirror { x: true, y: false };
        // 44 - 0 + 50 = 94, wrapped by 90
        assert_eq!(translate(0, 0, mirror, &layout, &buf), (4, 0));
    }
}
