//! Random source for phrase selection, decoy letters and hints.
//!
//! A session owns one [`Rng`]; seeding it with [`GameSession::with_seed`](crate::GameSession::with_seed)
//! makes the picked list, phrase and decoys repeatable.

/// xorshift64 generator behind every random pick of a session.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// Create a generator. A zero seed is treated as 1.
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniformly pick an index into a collection of `len` elements.
    /// Returns 0 for an empty collection; callers check emptiness first.
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u64() % len as u64) as usize
    }

    /// Uniformly choose one element of a slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.pick_index(items.len());
        items.get(index)
    }
}
