//! Seam between the joystick and the analog-to-digital converter.
//!
//! The converter runs on its own and notifies about a fresh X sample through
//! an interrupt. The interrupt handler must stay minimal, so all it does is
//! raise the [`PendingFlag`]. Everything else is pulled from the main loop.

use core::sync::atomic::{AtomicBool, Ordering};

/// Resolution of the conversion, all readings fit into `0..=MAX_READING`.
pub const MAX_READING: u16 = (1 << 14) - 1;

/// Dual-channel converter sampling both axes of the joystick.
///
/// Slot A holds axis X and is the only one raising the completion interrupt.
/// Slot B holds axis Y and is read on demand.
pub trait Sampler {
    /// Configure both slots, repeated conversion and the interrupt of slot A.
    ///
    /// Must be called exactly once, before [`Sampler::start`].
    fn initialize(&mut self);

    /// Start free-running conversion.
    fn start(&mut self);

    /// Latest completed conversion of axis X.
    fn read_x(&mut self) -> u16;

    /// Latest completed conversion of axis Y.
    fn read_y(&mut self) -> u16;
}

/// Notification that a fresh sample of axis X is available.
///
/// This is the only state shared between the interrupt and the main loop.
/// It is set from the interrupt handler through [`PendingFlag::raise`] and
/// consumed from the main loop through [`PendingFlag::take`]. Taking is a
/// single swap, so a notification raised while the main loop is in the middle
/// of a refresh is kept for the next one.
#[derive(Debug)]
pub struct PendingFlag {
    pending: AtomicBool,
}

impl PendingFlag {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Mark a new sample as available. Safe to call from interrupt context.
    pub fn raise(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Return whether a sample was pending and clear the flag.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::Acquire)
    }

    #[must_use]
    pub fn is_raised(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

impl Default for PendingFlag {
    fn default() -> Self {
        Self::new()
    }
}
