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

use serde::{Deserialize, Serialize};

/// Scorer's view of one candidate profile
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Opinion {
    /// Charge for the profile's usage under the subscribed tariff
    pub usage_charge: f64,

    /// `usage_charge` normalized to the scorer's comparable scale
    pub norm_usage_charge: f64,

    /// Behavioral distance from the population's base profile, normalized
    pub norm_profile_change: f64,

    /// Value of the profile to the customer bundle, normalized
    pub norm_bundle_value: f64,
}

impl Opinion {
    /// Opinion carrying only the charge components
    pub fn with_charge(usage_charge: f64, norm_usage_charge: f64) -> Self {
        Self {
            usage_charge,
            norm_usage_charge,
            ..Default::default()
        }
    }

    /// Ratio between the raw and normalized charge, 0 when undefined
    pub fn cost_normalization_const(&self) -> f64 {
        if self.norm_usage_charge == 0.0 {
            0.0
        } else {
            self.usage_charge / self.norm_usage_charge
        }
    }
}

/// Components a recommendation can weight when rescoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringFactor {
    ProfileChange,
    BundleValue,
}

/// Weights handed to a recommendation's scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub profile_change: f64,
    pub bundle_value: f64,
}

impl ScoringWeights {
    pub fn weight(&self, factor: ScoringFactor) -> f64 {
        match factor {
            ScoringFactor::ProfileChange => self.profile_change,
            ScoringFactor::BundleValue => self.bundle_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_normalization_const() {
        assert_eq!(Opinion::with_charge(10.0, 2.0).cost_normalization_const(), 5.0);
        assert_eq!(Opinion::with_charge(-10.0, 2.0).cost_normalization_const(), -5.0);
        assert_eq!(Opinion::with_charge(10.0, 0.0).cost_normalization_const(), 0.0);
    }

    #[test]
    fn test_weight_lookup() {
        let weights = ScoringWeights {
            profile_change: 0.25,
            bundle_value: 0.75,
        };
        assert_eq!(weights.weight(ScoringFactor::ProfileChange), 0.25);
        assert_eq!(weights.weight(ScoringFactor::BundleValue), 0.75);
    }
}
