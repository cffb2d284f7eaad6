//! Hardware-agnostic part of a joystick-driven virtual pet.
//!
//! It is mainly targetted to run in a firmware with a single main loop woken
//! up by interrupts. All access to hardware goes through narrow seams, so
//! everything here can be exercised on the host as well.
//!
//! ```text
//!   [ ADC ] --(conversion IRQ)--> {PendingFlag}
//!      |                               |
//!      +--------(read X, Y)-------+    |
//!                                 V    V
//!   [ Buttons ] --(Snapshot)--> [ MainLoop ] --(Joystick::refresh)
//!                                   |
//!                           (Taps, Buttons, now)
//!                                   V
//!                               [ App ] --(Display)--> [ LCD ]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod display;
pub mod input;
mod log;
pub mod pet;
pub mod timer;
