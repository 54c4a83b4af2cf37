//! Graphics support via embedded-graphics
//!
//! [`Display`] implements [`DrawTarget`] with [`BinaryColor`], so
//! embedded-graphics primitives, fonts and images can be drawn straight into
//! the pixel buffer.
//!
//! Pixels with negative coordinates are dropped. Pixels past the display
//! edge grow the buffer just like [`Display::set_pixel`], which makes it
//! possible to draw a wide scene and scroll across it.
//!
//! ## Example
//!
//! ```rust
//! use embedded_graphics::{
//!     pixelcolor::BinaryColor,
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle, Rectangle},
//! };
//! use microdotphat::{Config, Display, DisplayInterface};
//!
//! struct NoBus;
//! impl DisplayInterface for NoBus {
//!     type Error = core::convert::Infallible;
//!     fn write_register(&mut self, _: u8, _: u8, _: &[u8]) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//! }
//!
//! let mut display: Display<NoBus> = Display::new(Config::default());
//!
//! let _ = Rectangle::new(Point::new(0, 0), Size::new(5, 7))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! let _ = Line::new(Point::new(8, 6), Point::new(12, 0))
//!     .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
//!     .draw(&mut display);
//!
//! assert!(display.buffer().pixel(0, 0));
//! assert!(display.buffer().pixel(12, 0));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    prelude::Pixel,
};

use crate::display::Display;
use crate::interface::DisplayInterface;

impl<I> DrawTarget for Display<I>
where
    I: DisplayInterface,
{
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            // Non-negative, so this cannot fail.
            let _ = self.set_pixel(x, y, color.is_on());
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color.is_on());
        Ok(())
    }
}

impl<I> OriginDimensions for Display<I>
where
    I: DisplayInterface,
{
    fn size(&self) -> Size {
        let layout = self.layout();
        Size::new(layout.width as u32, layout.height as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Config, Layout};
    use embedded_graphics::{
        mono_font::{MonoTextStyle, ascii::FONT_4X6},
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
        text::{Baseline, Text},
    };

    #[derive(Debug)]
    struct MockInterface;

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn write_register(
            &mut self,
            _address: u8,
            _register: u8,
            _data: &[u8],
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn test_display(layout: Layout) -> Display<MockInterface> {
        Display::new(Builder::new().layout(layout).build())
    }

    #[test]
    fn test_size_is_display_size() {
        assert_eq!(test_display(Layout::MICRO_DOT_PHAT).size(), Size::new(45, 7));
        assert_eq!(test_display(Layout::COMPACT).size(), Size::new(30, 7));
    }

    #[test]
    fn test_negative_pixels_skipped() {
        let mut display = test_display(Layout::MICRO_DOT_PHAT);
        display
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(0, -3), BinaryColor::On),
            ])
            .unwrap();
        let blank = Display::<MockInterface>::new(Config::default());
        assert_eq!(display.buffer(), blank.buffer());
    }

    #[test]
    fn test_pixels_past_edge_grow_buffer() {
        let mut display = test_display(Layout::MICRO_DOT_PHAT);
        display
            .draw_iter([Pixel(Point::new(50, 2), BinaryColor::On)])
            .unwrap();
        assert_eq!(display.buffer().width(), 51);
        assert!(display.buffer().pixel(50, 2));
    }

    #[test]
    fn test_clear_fills_buffer() {
        let mut display = test_display(Layout::COMPACT);
        DrawTarget::clear(&mut display, BinaryColor::On).unwrap();
        assert!(display.buffer().pixel(29, 6));
        DrawTarget::clear(&mut display, BinaryColor::Off).unwrap();
        assert!(!display.buffer().pixel(29, 6));
    }

    #[test]
    fn test_filled_rectangle() {
        let mut display = test_display(Layout::MICRO_DOT_PHAT);
        Rectangle::new(Point::new(8, 0), Size::new(5, 7))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut display)
            .unwrap();
        let frames = display.frames();
        assert!(frames.frames()[1][..7].iter().all(|&row| row == 0b0001_1111));
        assert!(frames.frames()[0].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_mono_font_text() {
        let mut display = test_display(Layout::MICRO_DOT_PHAT);
        let style = MonoTextStyle::new(&FONT_4X6, BinaryColor::On);
        Text::with_baseline("Hi", Point::zero(), style, Baseline::Top)
            .draw(&mut display)
            .unwrap();
        let lit = (0..8).any(|x| (0..6).any(|y| display.buffer().pixel(x, y)));
        assert!(lit);
    }
}
