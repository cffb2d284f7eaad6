//! Render context the application draws through.
//!
//! Text is laid out on a grid of fixed-size character cells, shapes are
//! placed in pixels of the 128x128 screen.

/// Foreground colors used by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    Green,
    Blue,
    Red,
}

pub trait Display {
    /// Fill the whole screen with background.
    fn clear(&mut self);

    /// Print text starting at the given character cell.
    fn print(&mut self, text: &str, row: u8, column: u8);

    fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color);

    /// Cover a circle with background.
    fn remove_circle(&mut self, x: i32, y: i32, radius: u32);

    /// Draw outline of a rectangle between two corners, inclusive.
    fn draw_rectangle(&mut self, x_min: i32, y_min: i32, x_max: i32, y_max: i32);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::{Color, Display};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Clear,
        Print(String, u8, u8),
        FillCircle(i32, i32, u32, Color),
        RemoveCircle(i32, i32, u32),
        DrawRectangle(i32, i32, i32, i32),
    }

    /// Display keeping a log of all drawing requests.
    #[derive(Debug, Default)]
    pub struct RecordingDisplay {
        pub calls: Vec<Call>,
    }

    impl RecordingDisplay {
        pub fn printed(&self, text: &str) -> bool {
            self.calls
                .iter()
                .any(|call| matches!(call, Call::Print(t, _, _) if t == text))
        }

        pub fn printed_at(&self, row: u8, column: u8) -> Option<&str> {
            self.calls.iter().rev().find_map(|call| match call {
                Call::Print(t, r, c) if *r == row && *c == column => Some(t.as_str()),
                _ => None,
            })
        }

        pub fn forget(&mut self) {
            self.calls.clear();
        }
    }

    impl Display for RecordingDisplay {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn print(&mut self, text: &str, row: u8, column: u8) {
            self.calls.push(Call::Print(text.to_string(), row, column));
        }

        fn fill_circle(&mut self, x: i32, y: i32, radius: u32, color: Color) {
            self.calls.push(Call::FillCircle(x, y, radius, color));
        }

        fn remove_circle(&mut self, x: i32, y: i32, radius: u32) {
            self.calls.push(Call::RemoveCircle(x, y, radius));
        }

        fn draw_rectangle(&mut self, x_min: i32, y_min: i32, x_max: i32, y_max: i32) {
            self.calls
                .push(Call::DrawRectangle(x_min, y_min, x_max, y_max));
        }
    }
}
