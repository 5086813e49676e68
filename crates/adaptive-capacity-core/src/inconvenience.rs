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

use adaptive_capacity_types::{CapacityProfile, NUM_TIMESLOTS, Opinion, TariffId};
use std::collections::HashMap;
use tracing::{debug, error};

/// Latest behavioral switching cost per tariff, on the charge's own scale
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InconvenienceTracker {
    by_tariff: HashMap<TariffId, f64>,
}

impl InconvenienceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive and store the inconvenience of adopting `chosen` under `tariff`
    ///
    /// The non-scaled score is `charge / a + w * d / b`, where `a` is the
    /// charge/normalized-charge ratio. Multiplying by `|a|` and subtracting the
    /// charge leaves `w * |a| / b * d`, the behavioral distance priced like the
    /// charge. Replaces any earlier value for the tariff.
    pub fn record(
        &mut self,
        chosen: &CapacityProfile,
        opinion: &Opinion,
        non_scaled_score: f64,
        tariff: TariffId,
    ) -> f64 {
        let inconvenience =
            opinion.cost_normalization_const().abs() * non_scaled_score - opinion.usage_charge;
        debug!(
            "Inconvenience for {} = {:.4} (chosen total {:.2})",
            tariff,
            inconvenience,
            chosen.total()
        );
        self.by_tariff.insert(tariff, inconvenience);
        inconvenience
    }

    /// Stored value for one profile window, if any
    pub fn get(&self, tariff: TariffId) -> Option<f64> {
        self.by_tariff.get(&tariff).copied()
    }

    /// Inconvenience scaled from one profile window to `window_length` timeslots
    ///
    /// Only whole profile windows count, so a trailing partial window adds
    /// nothing. A tariff with no recorded value yields 0 after logging the
    /// anomaly.
    pub fn query(&self, tariff: TariffId, window_length: usize) -> f64 {
        match self.get(tariff) {
            Some(inconvenience) => {
                let windows = window_length / NUM_TIMESLOTS;
                inconvenience * windows as f64
            }
            None => {
                error!("No inconvenience recorded for {}", tariff);
                0.0
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_tariff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tariff.is_empty()
    }
}
