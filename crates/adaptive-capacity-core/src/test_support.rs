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

//! Stub collaborators shared by the unit tests

use adaptive_capacity_types::{
    CapacityProfile, Opinion, ProfileMap, ScoringWeights, Subscription, TimeslotIndex,
};

use crate::traits::{BaselineForecast, CapacityAdjuster, ProfileRecommendation};

/// Linear scorer: lower weighted cost means higher utility
#[derive(Debug, Clone, Default)]
pub struct StubRecommendation {
    pub opinions: ProfileMap<Opinion>,
    pub scores: ProfileMap<f64>,
    pub utilities: ProfileMap<f64>,
    pub probabilities: ProfileMap<f64>,
}

impl StubRecommendation {
    /// Recommendation whose derived maps were filled in by the publisher
    pub fn published(candidates: &[(CapacityProfile, Opinion, f64, f64)]) -> Self {
        let mut rec = Self::default();
        for (profile, opinion, utility, probability) in candidates {
            rec.opinions.insert(profile.clone(), *opinion);
            rec.scores.insert(profile.clone(), -utility);
            rec.utilities.insert(profile.clone(), *utility);
            rec.probabilities.insert(profile.clone(), *probability);
        }
        rec
    }
}

impl ProfileRecommendation for StubRecommendation {
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

/// Baseline that forecasts the same capacity everywhere
#[derive(Debug, Clone, Copy)]
pub struct FlatBaseline(pub f64);

impl BaselineForecast for FlatBaseline {
    fn base_capacity(&self, _current_timeslot: TimeslotIndex, _timeslot: TimeslotIndex) -> f64 {
        self.0
    }
}

/// Adjuster that scales single timeslots and repeats the window to fill the record
#[derive(Debug, Clone, Copy)]
pub struct ScalingAdjuster(pub f64);

impl CapacityAdjuster for ScalingAdjuster {
    fn adjust_for_subscription(
        &self,
        _timeslot: TimeslotIndex,
        capacity: f64,
        _subscription: &Subscription,
    ) -> f64 {
        capacity * self.0
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
