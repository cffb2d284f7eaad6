//! The pet itself, its stats and how they evolve.

use core::fmt::Write;

use heapless::String;

use crate::display::{Color, Display};
use crate::log;

pub const MAX_ENERGY: u8 = 5;
pub const MAX_HAPPINESS: u8 = 5;
const INITIAL_HAPPINESS: u8 = 3;

/// How many steps the pet can walk away from home in either direction.
const MAX_STEPS: i8 = 3;
const STEP_WIDTH: i32 = 10;
const HOME_X: i32 = 65;
const GROUND_Y: i32 = 85;

/// Character cells where stats are printed, as `(row, column)`.
pub(crate) const AGE_CELL: (u8, u8) = (1, 10);
pub(crate) const ENERGY_CELL: (u8, u8) = (3, 11);
pub(crate) const HAPPINESS_CELL: (u8, u8) = (5, 13);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    #[default]
    Child,
    Teen,
    Adult,
}

impl Stage {
    fn radius(self) -> u32 {
        match self {
            Self::Child => 8,
            Self::Teen => 10,
            Self::Adult => 12,
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Child => Color::Green,
            Self::Teen => Color::Blue,
            Self::Adult => Color::Red,
        }
    }
}

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pet {
    pub age: u32,
    pub energy: u8,
    pub happiness: u8,
    pub position: i8,
    pub stage: Stage,
    movements: u32,
    // Age at which the pet became a teen, plus one.
    teen_since: u32,
    needs_erase: bool,
}

impl Default for Pet {
    fn default() -> Self {
        Self {
            age: 0,
            energy: MAX_ENERGY,
            happiness: INITIAL_HAPPINESS,
            position: 0,
            stage: Stage::Child,
            movements: 0,
            teen_since: 0,
            needs_erase: false,
        }
    }
}

impl Pet {
    /// Horizontal position of the pet's center in pixels.
    #[must_use]
    pub fn x(&self) -> i32 {
        HOME_X + i32::from(self.position) * STEP_WIDTH
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.energy == 0 && self.happiness == 0
    }

    pub fn walk_left<D: Display>(&mut self, display: &mut D) {
        if self.position > -MAX_STEPS && self.energy > 0 {
            self.position -= 1;
            self.play(display);
        }
    }

    pub fn walk_right<D: Display>(&mut self, display: &mut D) {
        if self.position < MAX_STEPS && self.energy > 0 {
            self.position += 1;
            self.play(display);
        }
    }

    // Walking around makes the pet happy, every other step makes it tired.
    fn play<D: Display>(&mut self, display: &mut D) {
        self.needs_erase = true;
        self.movements = self.movements.wrapping_add(1);
        if self.happiness < MAX_HAPPINESS {
            self.happiness += 1;
            print_number(display, self.happiness.into(), HAPPINESS_CELL);
        }
        if self.movements % 2 == 0 {
            self.energy = self.energy.saturating_sub(1);
            print_number(display, self.energy.into(), ENERGY_CELL);
        }
    }

    pub fn feed<D: Display>(&mut self, display: &mut D) {
        if self.energy < MAX_ENERGY {
            self.energy += 1;
            print_number(display, self.energy.into(), ENERGY_CELL);
        }
    }

    /// Let a period of time pass, making the pet older, hungrier and sadder.
    pub fn decay<D: Display>(&mut self, display: &mut D) {
        if self.energy > 0 {
            self.energy -= 1;
            print_number(display, self.energy.into(), ENERGY_CELL);
        }
        if self.happiness > 0 {
            self.happiness -= 1;
            print_number(display, self.happiness.into(), HAPPINESS_CELL);
        }
        self.age = self.age.saturating_add(1);
        print_number(display, self.age, AGE_CELL);
    }

    /// Draw the pet at its position and let it grow up if it is ready.
    pub fn draw_and_grow<D: Display>(&mut self, display: &mut D) {
        let radius = self.stage.radius();
        let x = self.x();
        if self.needs_erase {
            display.remove_circle(x + STEP_WIDTH, GROUND_Y, radius);
            display.remove_circle(x - STEP_WIDTH, GROUND_Y, radius);
            self.needs_erase = false;
        }
        display.fill_circle(x, GROUND_Y, radius, self.stage.color());
        self.grow();
    }

    fn grow(&mut self) {
        match self.stage {
            Stage::Child if self.age >= 3 && self.energy >= 3 && self.happiness >= 4 => {
                self.teen_since = self.age + 1;
                self.stage = Stage::Teen;
                log::info!("Pet grew into a teen at age {}", self.age);
            }
            Stage::Teen
                if self.age >= 7
                    && self.energy >= 2
                    && self.happiness >= 2
                    && self.age > self.teen_since =>
            {
                self.teen_since = 0;
                self.stage = Stage::Adult;
                log::info!("Pet grew into an adult at age {}", self.age);
            }
            _ => (),
        }
    }
}

pub(crate) fn print_number<D: Display>(display: &mut D, value: u32, (row, column): (u8, u8)) {
    let mut text: String<10> = String::new();
    let _ = write!(text, "{value}");
    display.print(&text, row, column);
}
