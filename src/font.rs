//! Built-in fonts
//!
//! Two tables are provided:
//!
//! - [`glyph`]: a 5x7 font covering printable ASCII. Each glyph is five
//!   column bytes, left to right; bit 0 of a column is the top row.
//! - [`tiny_digit`]: digits small enough to stack two or three on a single
//!   matrix. Each glyph is a list of 5-bit rows drawn upward from the bottom
//!   of the matrix; bit 0 is the rightmost column.
//!
//! ## Example
//!
//! ```
//! use microdotphat::font::{glyph, FONT_WIDTH};
//!
//! let one = glyph('1').unwrap_or(&[0; FONT_WIDTH]);
//! assert_eq!(one[2], 0x7F);
//! assert!(glyph('\u{263A}').is_none());
//! ```

/// Glyph width in columns
pub const FONT_WIDTH: usize = 5;

/// Glyph height in rows
pub const FONT_HEIGHT: usize = 7;

/// Width of a tiny digit row in columns
pub const TINY_WIDTH: usize = 5;

const FIRST_CHAR: char = ' ';

const ASCII: [[u8; FONT_WIDTH]; 95] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x56, 0x20, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x14, 0x08, 0x3E, 0x08, 0x14], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x01, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x32], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x04, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x7F, 0x20, 0x18, 0x20, 0x7F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x10, 0x08, 0x08, 0x10, 0x08], // ~
];

const TINY_DIGITS: [&[u8]; 10] = [
    &[0b11111, 0b11111], // 0
    &[0b11111],          // 1
    &[0b10111, 0b11101], // 2
    &[0b10101, 0b11111], // 3
    &[0b11110, 0b00011], // 4
    &[0b11101, 0b10111], // 5
    &[0b11111, 0b00111], // 6
    &[0b10000, 0b11111], // 7
    &[0b10101, 0b10101], // 8
    &[0b11100, 0b11111], // 9
];

/// Look up the 5x7 glyph for `c`
///
/// Returns `None` for characters outside printable ASCII.
pub fn glyph(c: char) -> Option<&'static [u8; FONT_WIDTH]> {
    let index = (c as u32).checked_sub(FIRST_CHAR as u32)?;
    ASCII.get(index as usize)
}

/// Look up the tiny glyph for a decimal digit
///
/// Returns `None` for anything but `'0'..='9'`.
pub fn tiny_digit(c: char) -> Option<&'static [u8]> {
    let digit = c.to_digit(10)?;
    TINY_DIGITS.get(digit as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_covers_printable_ascii() {
        for c in ' '..='~' {
            assert!(glyph(c).is_some(), "missing glyph for {c:?}");
        }
        assert!(glyph('\n').is_none());
        assert!(glyph('\u{7F}').is_none());
        assert!(glyph('é').is_none());
    }

    #[test]
    fn test_glyphs_fit_font_height() {
        for c in ' '..='~' {
            let columns = glyph(c).unwrap();
            assert!(columns.iter().all(|col| col >> FONT_HEIGHT == 0));
        }
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(glyph(' '), Some(&[0; FONT_WIDTH]));
    }

    #[test]
    fn test_tiny_digit_lookup() {
        assert_eq!(tiny_digit('1'), Some(&[0b11111][..]));
        assert_eq!(tiny_digit('8').map(<[u8]>::len), Some(2));
        assert!(tiny_digit('a').is_none());
        assert!(tiny_digit('.').is_none());
    }

    #[test]
    fn test_tiny_rows_fit_width() {
        for c in '0'..='9' {
            let rows = tiny_digit(c).unwrap();
            assert!(rows.iter().all(|row| row >> TINY_WIDTH == 0));
        }
    }
}
