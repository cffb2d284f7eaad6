//! The virtual pet game.
//!
//! The game is a state machine over screens, advanced once per iteration of
//! the main loop with the latest inputs:
//!
//! ```text
//!   [ Title ] --(timeout)--> [ Instructions ] --(BB1)--> [ Game ]
//!                                  A                        |
//!                                  |                  (exhausted)
//!                                (BB1)                      |
//!                                  |                        V
//!                                  +------------------ [ GameOver ]
//! ```

mod creature;
mod screens;

pub use creature::{Pet, Stage, MAX_ENERGY, MAX_HAPPINESS};

use crate::config::{DECAY_INTERVAL, TITLE_SCREEN_WAIT};
use crate::display::Display;
use crate::input::debounce::Taps;
use crate::input::store::Buttons;
use crate::log;
use crate::timer::Countdown;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    Title,
    Instructions,
    Game,
    GameOver,
}

#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct App {
    screen: Screen,
    title_timer: Countdown,
    decay_timer: Countdown,
    pet: Pet,
    end_shown: bool,
}

impl App {
    /// Show the title screen and start counting down to instructions.
    pub fn new<D: Display>(now: u32, display: &mut D) -> Self {
        let mut title_timer = Countdown::new(TITLE_SCREEN_WAIT);
        title_timer.start(now);
        screens::show_title(display);
        Self {
            screen: Screen::Title,
            title_timer,
            decay_timer: Countdown::new(DECAY_INTERVAL),
            pet: Pet::default(),
            end_shown: false,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn pet(&self) -> &Pet {
        &self.pet
    }

    /// Advance the game by one iteration of the main loop.
    ///
    /// `now` is the current time in milliseconds, `taps` are directions the
    /// joystick was tapped to in the latest refresh.
    pub fn update<D: Display>(
        &mut self,
        now: u32,
        taps: Taps,
        buttons: &Buttons,
        display: &mut D,
    ) {
        let feed = buttons.booster_1.tapped;

        match self.screen {
            Screen::Title => {
                if self.title_timer.expired(now) {
                    self.enter(Screen::Instructions);
                    screens::show_instructions(display);
                }
            }
            Screen::Instructions => {
                if feed {
                    self.pet = Pet::default();
                    self.end_shown = false;
                    screens::show_game(display, &self.pet);
                    self.decay_timer.start(now);
                    self.enter(Screen::Game);
                }
            }
            Screen::Game => {
                if taps.left {
                    self.pet.walk_left(display);
                }
                if taps.right {
                    self.pet.walk_right(display);
                }
                self.pet.draw_and_grow(display);

                if self.decay_timer.expired(now) {
                    self.pet.decay(display);
                    self.decay_timer.start(now);
                }

                if feed {
                    self.pet.feed(display);
                }

                if self.pet.is_exhausted() {
                    self.enter(Screen::GameOver);
                }
            }
            Screen::GameOver => {
                if !self.end_shown {
                    screens::show_end(display, &self.pet);
                    self.end_shown = true;
                }
                if feed && self.pet.energy < MAX_ENERGY {
                    self.enter(Screen::Instructions);
                    screens::show_instructions(display);
                }
            }
        }
    }

    fn enter(&mut self, screen: Screen) {
        log::info!("Switching screen from {:?} to {:?}", self.screen, screen);
        self.screen = screen;
    }
}
