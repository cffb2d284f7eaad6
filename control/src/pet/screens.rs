//! Static content of each screen.

use super::creature::{print_number, Pet, AGE_CELL, ENERGY_CELL, HAPPINESS_CELL};
use crate::display::Display;

pub fn show_title<D: Display>(display: &mut D) {
    display.clear();
    display.print("Low - Power", 7, 4);
    display.print("Tamagotchi", 8, 3);
    display.print("Your interrupt-", 10, 2);
    display.print("driven virtual pet!", 11, 1);
}

pub fn show_instructions<D: Display>(display: &mut D) {
    display.clear();
    display.print("Welcome to the", 1, 5);
    display.print("wonderful world of", 2, 2);
    display.print("TAMAGOTCHI!", 3, 5);
    display.print("Take good care of", 5, 1);
    display.print("your pet by feeding", 6, 1);
    display.print("and playing with it.", 7, 1);
    display.print("Watch as your", 8, 1);
    display.print("Tamagotchi grows!", 9, 1);
    display.print("Press BB1 to feed", 11, 1);
    display.print("your pet. Tap the", 12, 1);
    display.print("right to play. :)", 13, 1);
}

pub fn show_game<D: Display>(display: &mut D, pet: &Pet) {
    display.clear();
    display.print("Age: ", AGE_CELL.0, 2);
    print_number(display, pet.age, AGE_CELL);
    display.print("Energy:", ENERGY_CELL.0, 2);
    print_number(display, pet.energy.into(), ENERGY_CELL);
    display.print("Happiness:", HAPPINESS_CELL.0, 2);
    print_number(display, pet.happiness.into(), HAPPINESS_CELL);
    // Pen the pet walks within.
    display.draw_rectangle(10, 60, 120, 110);
}

pub fn show_end<D: Display>(display: &mut D, pet: &Pet) {
    display.clear();
    display.print("Your Tamagotchi", 4, 3);
    display.print("packed its bags", 5, 2);
    display.print("and left...", 6, 5);
    display.print("Age: ", 9, 5);
    print_number(display, pet.age, (9, 10));
    display.print("Play Again? (BB1)", 13, 2);
}
