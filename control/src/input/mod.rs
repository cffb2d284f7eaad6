//! Abstraction of user inputs: the analog joystick and board buttons.

pub mod button;
pub mod debounce;
pub mod debounced;
pub mod joystick;
pub mod sampler;
pub mod snapshot;
pub mod store;
