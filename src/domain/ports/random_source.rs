//! RandomSource port
//!
//! Ingestion and profile generation draw synthetic values through this port
//! so tests can substitute a seeded or scripted generator.

pub trait RandomSource: Send {
    /// Uniform draw from `0..upper`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Pick one element uniformly. `items` must be non-empty.
pub fn choose<'a, T>(random: &mut dyn RandomSource, items: &'a [T]) -> &'a T {
    &items[random.next_index(items.len()) % items.len()]
}

/// Replays a fixed sequence of indices, wrapping around. Test use only.
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: Vec<usize>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_index(&mut self, upper: usize) -> usize {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % upper
    }
}
