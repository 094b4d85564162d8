//! 32-bit LFSR keystream generator
//!
//! This module implements a Fibonacci-style linear-feedback shift
//! register over a 32-bit state. Each clock shifts the register right by
//! one bit; when the ejected bit is 1 the feedback constant is XORed into
//! the shifted state. Eight clocks produce one keystream byte (the low
//! byte of the register), so each output bit depends on a wider span of
//! the register than a single clock would give.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::types::Seed;

/// Feedback polynomial taps of the reference configuration
pub const DEFAULT_FEEDBACK: u32 = 0x7fe0_0ae3;
/// Register clocks consumed per keystream byte
pub const LFSR_STEPS_PER_BYTE: usize = 8;

/// 32-bit LFSR keystream generator
///
/// The keystream is a pure function of the seed, the feedback constant,
/// and the number of bytes drawn: two generators built from equal
/// parameters emit identical byte sequences. Encryption and decryption
/// are both [`process`](Lfsr32::process); XOR is self-inverse.
///
/// A zero seed is a fixed point of the register and yields an all-zero
/// keystream, leaving data unchanged. The stepping function is total, so
/// this is not rejected here; callers that need an effective cipher
/// should pick a non-zero seed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Lfsr32 {
    /// Current register state
    state: u32,
    /// Initial register value, kept for reset
    seed: u32,
    /// Feedback polynomial taps
    feedback: u32,
}

impl Lfsr32 {
    /// Creates a new generator with the specified seed and feedback constant
    pub fn new(seed: &Seed, feedback: u32) -> Self {
        Self {
            state: seed.value(),
            seed: seed.value(),
            feedback,
        }
    }

    /// Creates a new generator with the reference feedback polynomial
    pub fn with_default_feedback(seed: &Seed) -> Self {
        Self::new(seed, DEFAULT_FEEDBACK)
    }

    /// Advances the register by one clock and returns the new state
    ///
    /// The low bit is ejected by a right shift; when it was 1 the
    /// feedback taps are XORed into the shifted state.
    #[inline]
    pub fn step(&mut self) -> u32 {
        let low_bit = self.state & 1;
        self.state >>= 1;
        if low_bit == 1 {
            self.state ^= self.feedback;
        }
        self.state
    }

    /// Derives the next keystream byte
    ///
    /// Clocks the register exactly eight times and returns the low byte
    /// of the resulting state. The stepped state carries over, so the
    /// next call continues the sequence.
    pub fn next_byte(&mut self) -> u8 {
        for _ in 0..LFSR_STEPS_PER_BYTE {
            self.step();
        }
        (self.state & 0xFF) as u8
    }

    /// Encrypt or decrypt data in place using the keystream
    pub fn process(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.next_byte();
        }
    }

    /// Encrypt data in place
    pub fn encrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Decrypt data in place
    pub fn decrypt(&mut self, data: &mut [u8]) {
        self.process(data);
    }

    /// Generate keystream directly into an output buffer
    pub fn keystream(&mut self, output: &mut [u8]) {
        for byte in output.iter_mut() {
            *byte = self.next_byte();
        }
    }

    /// Reset the register to the seed it was constructed with
    pub fn reset(&mut self) {
        self.state = self.seed;
    }

    /// The current register state
    pub fn state(&self) -> u32 {
        self.state
    }
}
