//! Id generation for emitted program, day, week and exercise records.
//!
//! Ids carry no meaning and are never used for joins; the compiler only asks
//! for fresh ones through [`IdGenerator`], so tests can swap in
//! [`SequentialIds`] and get reproducible output.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::{Cell, RefCell};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Source of fresh identifiers
pub trait IdGenerator {
    fn generate(&self, length: usize) -> String;
}

/// Random lowercase ids
#[derive(Debug)]
pub struct RandomIds {
    rng: RefCell<StdRng>,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: RefCell::new(StdRng::from_entropy()),
        }
    }

    /// Seeded generator: same seed, same id stream
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RefCell::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn generate(&self, length: usize) -> String {
        let mut rng = self.rng.borrow_mut();
        (0..length)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect()
    }
}

/// Zero-padded counter ids: `00000001`, `00000002`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: Cell<u64>,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&self, length: usize) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("{:0width$}", n, width = length)
    }
}
