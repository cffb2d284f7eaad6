//! Render context over an `embedded-graphics` draw target.

use embedded_graphics::mono_font::ascii::FONT_6X9;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use pet_control::display::{Color, Display};

const CHARACTER_WIDTH: i32 = 6;
const LINE_HEIGHT: i32 = 9;

const FOREGROUND: Rgb565 = Rgb565::BLACK;
const BACKGROUND: Rgb565 = Rgb565::WHITE;

pub struct Lcd<T> {
    target: T,
    text_style: MonoTextStyle<'static, Rgb565>,
}

impl<T> Lcd<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: T) -> Self {
        let text_style = MonoTextStyleBuilder::new()
            .font(&FONT_6X9)
            .text_color(FOREGROUND)
            .background_color(BACKGROUND)
            .build();
        Self { target, text_style }
    }
}

// Failed drawing leaves the screen stale and there is nothing to do about
// it, so draw errors are dropped.
impl<T> Display for Lcd<T>
where
    T: DrawTarget<Color = Rgb565>,
{
    fn clear(&mut self) {
        let _ = self.target.clear(BACKGROUND);
    }

    fn print(&mut self, text: &str, row: u8, column: u8) {
        let position = Point::new(
            i32::from(column) * CHARACTER_WIDTH,
            i32::from(row) * LINE_HEIGHT,
        );
        let _ = Text::with_baseline(text, position, self.text_style, Baseline::Top)
            .draw(&mut self.target);
    }

    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color) {
        fill_circle(&mut self.target, x, y, radius, rgb(color));
    }

    fn remove_circle(&mut self, x: i32, y: i32, radius: u32) {
        fill_circle(&mut self.target, x, y, radius, BACKGROUND);
    }

    fn draw_rectangle(&mut self, x_min: i32, y_min: i32, x_max: i32, y_max: i32) {
        let _ = Rectangle::with_corners(Point::new(x_min, y_min), Point::new(x_max, y_max))
            .into_styled(PrimitiveStyle::with_stroke(FOREGROUND, 1))
            .draw(&mut self.target);
    }
}

fn fill_circle<T>(target: &mut T, x: i32, y: i32, radius: u32, color: Rgb565)
where
    T: DrawTarget<Color = Rgb565>,
{
    let _ = Circle::with_center(Point::new(x, y), radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target);
}

fn rgb(color: Color) -> Rgb565 {
    match color {
        Color::Black => Rgb565::BLACK,
        Color::Green => Rgb565::GREEN,
        Color::Blue => Rgb565::BLUE,
        Color::Red => Rgb565::RED,
    }
}
