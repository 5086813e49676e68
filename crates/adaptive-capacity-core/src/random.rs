// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of FluxION.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use rand::distributions::Standard;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies reproducible seeds to stochastic components
pub trait SeedProvider {
    /// Seed for one (component, instance, purpose) triple
    fn random_seed(&self, component: &str, instance_id: u64, purpose: &str) -> u64;
}

/// Sequential source of uniform draws owned by one originator
///
/// Seeded once and never cloned, so replaying the same events against the
/// same seed consumes the same draws in the same order.
#[derive(Debug)]
pub struct ReactionStream {
    rng: StdRng,
    draws: u64,
}

impl ReactionStream {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Next uniform value in [0, 1)
    ///
    /// Sampled at single precision and widened.
    pub fn next_draw(&mut self) -> f64 {
        self.draws += 1;
        let draw: f32 = self.rng.sample(Standard);
        f64::from(draw)
    }

    /// Number of draws taken since construction
    pub fn draws_consumed(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = ReactionStream::from_seed(7);
        let mut b = ReactionStream::from_seed(7);
        for _ in 0..100 {
            assert_eq!(a.next_draw().to_bits(), b.next_draw().to_bits());
        }
        assert_eq!(a.draws_consumed(), 100);
    }

    #[test]
    fn test_draws_are_unit_interval() {
        let mut stream = ReactionStream::from_seed(1);
        for _ in 0..1000 {
            let draw = stream.next_draw();
            assert!((0.0..1.0).contains(&draw));
        }
    }
}
