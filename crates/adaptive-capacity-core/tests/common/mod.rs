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

use adaptive_capacity_core::{
    BaselineForecast, CapacityAdjuster, CapacityProfile, Opinion, ProfileMap,
    ProfileRecommendation, ScoringWeights, Subscription, TimeslotIndex,
};
use std::sync::Once;

static TRACING: Once = Once::new();

pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Deterministic scorer: weighted cost, utility = -cost, softmax probabilities
#[derive(Debug, Clone, Default)]
pub struct WeightedRecommendation {
    opinions: ProfileMap<Opinion>,
    scores: ProfileMap<f64>,
    utilities: ProfileMap<f64>,
    probabilities: ProfileMap<f64>,
}

impl WeightedRecommendation {
    /// Recommendation scored by the publisher with its own weights
    pub fn published(opinions: ProfileMap<Opinion>, weights: &ScoringWeights) -> Self {
        let mut rec = Self::from_opinions(opinions);
        rec.compute_scores(weights);
        rec.compute_utilities();
        rec.compute_probabilities(1.0);
        rec
    }
}

impl ProfileRecommendation for WeightedRecommendation {
    fn from_opinions(opinions: ProfileMap<Opinion>) -> Self {
        Self {
            opinions,
            ..Default::default()
        }
    }

    fn opinions(&self) -> &ProfileMap<Opinion> {
        &self.opinions
    }

    fn compute_scores(&mut self, weights: &ScoringWeights) {
        self.scores = self
            .opinions
            .iter()
            .map(|(profile, opinion)| {
                let score = opinion.norm_usage_charge
                    + weights.profile_change * opinion.norm_profile_change
                    - weights.bundle_value * opinion.norm_bundle_value;
                (profile.clone(), score)
            })
            .collect();
    }

    fn compute_utilities(&mut self) {
        self.utilities = self.scores.iter().map(|(p, s)| (p.clone(), -s)).collect();
    }

    fn compute_probabilities(&mut self, rationality_factor: f64) {
        let total: f64 = self
            .utilities
            .iter()
            .map(|(_, u)| (rationality_factor * u).exp())
            .sum();
        self.probabilities = self
            .utilities
            .iter()
            .map(|(p, u)| (p.clone(), (rationality_factor * u).exp() / total))
            .collect();
    }

    fn utilities(&self) -> &ProfileMap<f64> {
        &self.utilities
    }

    fn probabilities(&self) -> &ProfileMap<f64> {
        &self.probabilities
    }

    fn non_scaled_score(&self, profile: &CapacityProfile) -> f64 {
        self.scores.get(profile).copied().unwrap_or_default()
    }
}

/// Two candidates: A = 1.0 everywhere, B = 2.0 everywhere
///
/// B costs less in normalized charge but changes behavior more.
pub fn two_candidates() -> ProfileMap<Opinion> {
    let mut opinions = ProfileMap::new();
    opinions.insert(
        profile_a(),
        Opinion {
            usage_charge: 12.0,
            norm_usage_charge: 0.6,
            norm_profile_change: 0.0,
            ..Default::default()
        },
    );
    opinions.insert(
        profile_b(),
        Opinion {
            usage_charge: 8.0,
            norm_usage_charge: 0.4,
            norm_profile_change: 0.5,
            ..Default::default()
        },
    );
    opinions
}

/// Same charges as [`two_candidates`], but both profiles ask for a behavior change
///
/// Under 0.5/0.5 weights A scores 0.6 + 0.2 = 0.8 and B scores 0.4 + 0.5 = 0.9.
pub fn behavioral_candidates() -> ProfileMap<Opinion> {
    let mut opinions = ProfileMap::new();
    opinions.insert(
        profile_a(),
        Opinion {
            usage_charge: 12.0,
            norm_usage_charge: 0.6,
            norm_profile_change: 0.4,
            ..Default::default()
        },
    );
    opinions.insert(
        profile_b(),
        Opinion {
            usage_charge: 8.0,
            norm_usage_charge: 0.4,
            norm_profile_change: 1.0,
            ..Default::default()
        },
    );
    opinions
}

pub fn profile_a() -> CapacityProfile {
    CapacityProfile::uniform(1.0)
}

pub fn profile_b() -> CapacityProfile {
    CapacityProfile::uniform(2.0)
}

pub struct FlatBaseline(pub f64);

impl BaselineForecast for FlatBaseline {
    fn base_capacity(&self, _current_timeslot: TimeslotIndex, _timeslot: TimeslotIndex) -> f64 {
        self.0
    }
}

/// Passes capacities through and repeats the forecast window to the requested length
pub struct PassThroughAdjuster;

impl CapacityAdjuster for PassThroughAdjuster {
    fn adjust_for_subscription(
        &self,
        _timeslot: TimeslotIndex,
        capacity: f64,
        _subscription: &Subscription,
    ) -> f64 {
        capacity
    }

    fn adjust_for_tariff_rates(
        &self,
        profile: CapacityProfile,
        _timeslot: TimeslotIndex,
        _subscription: &Subscription,
    ) -> CapacityProfile {
        profile
    }

    fn convert_units(&self, profile: &CapacityProfile, window_length: usize) -> Vec<f64> {
        profile.values().iter().copied().cycle().take(window_length).collect()
    }
}
