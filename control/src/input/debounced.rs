//! Majority filter for bouncing digital inputs.

/// Level of a digital input filtered by majority over last `N` samples.
#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debounced<const N: usize> {
    debounce_filter: DebounceBuffer<N>,
    active: bool,
}

impl<const N: usize> Default for Debounced<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Debounced<N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            debounce_filter: DebounceBuffer::new(),
            active: false,
        }
    }

    pub fn update(&mut self, value: bool) -> bool {
        self.debounce_filter.write(value);
        self.active = self.debounce_filter.read();
        self.active
    }

    #[must_use]
    pub fn active(&self) -> bool {
        self.active
    }
}

#[derive(Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct DebounceBuffer<const N: usize> {
    buffer: [bool; N],
    pointer: usize,
}

impl<const N: usize> DebounceBuffer<N> {
    fn new() -> Self {
        Self {
            buffer: [false; N],
            pointer: 0,
        }
    }

    fn write(&mut self, value: bool) {
        self.buffer[self.pointer] = value;
        self.pointer = (self.pointer + 1) % N;
    }

    fn read(&self) -> bool {
        let up: usize = self.buffer.iter().filter(|i| **i).count();
        up > N / 2
    }
}
