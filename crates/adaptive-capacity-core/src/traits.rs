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

use adaptive_capacity_types::{
    CapacityProfile, Opinion, ProfileMap, ScoringWeights, Subscription, TimeslotIndex,
};
use std::fmt;

use crate::error::Result;

// ============= Recommendation Collaborator =============

/// Scored set of candidate profiles published to customer bundles
///
/// Derived maps only exist after the matching compute step has run, and the
/// steps must run in order: `compute_scores`, `compute_utilities`,
/// `compute_probabilities`. Reading `utilities` or `probabilities` before
/// their step is a contract violation of the caller.
pub trait ProfileRecommendation {
    /// Fresh, unscored recommendation over the given opinions
    fn from_opinions(opinions: ProfileMap<Opinion>) -> Self
    where
        Self: Sized;

    fn opinions(&self) -> &ProfileMap<Opinion>;

    fn compute_scores(&mut self, weights: &ScoringWeights);

    fn compute_utilities(&mut self);

    fn compute_probabilities(&mut self, rationality_factor: f64);

    fn utilities(&self) -> &ProfileMap<f64>;

    fn probabilities(&self) -> &ProfileMap<f64>;

    /// Score before any scaling across candidates:
    /// normalized charge plus weighted behavioral distance
    fn non_scaled_score(&self, profile: &CapacityProfile) -> f64;
}

/// Receives recommendations from the publisher
pub trait RecommendationListener<R: ProfileRecommendation> {
    /// Recommendation addressed to the whole population
    fn handle_profile_recommendation(
        &mut self,
        recommendation: &R,
        current_timeslot: TimeslotIndex,
        timeslots: &dyn TimeslotSequence,
    ) -> Result<()>;

    /// Recommendation addressed to one subscription, together with that
    /// subscription's current forecast as known to the publisher
    fn handle_profile_recommendation_per_sub(
        &mut self,
        recommendation: &R,
        subscription: &Subscription,
        current_timeslot: TimeslotIndex,
        own_forecast: &CapacityProfile,
        timeslots: &dyn TimeslotSequence,
    ) -> Result<()>;
}

// ============= Simulation Collaborators =============

/// Simulation clock; consecutive timeslots are not assumed to be consecutive integers
///
/// Operations take the current timeslot as an argument, so the sequence only
/// has to step and resolve serial numbers.
pub trait TimeslotSequence {
    fn next(&self, index: TimeslotIndex) -> TimeslotIndex;

    /// Resolve a serial number to the timeslot it denotes
    fn lookup(&self, serial_number: TimeslotIndex) -> TimeslotIndex;
}

/// Gapless timeslot sequence where the next slot is `index + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContiguousTimeslots;

impl TimeslotSequence for ContiguousTimeslots {
    fn next(&self, index: TimeslotIndex) -> TimeslotIndex {
        index + 1
    }

    fn lookup(&self, serial_number: TimeslotIndex) -> TimeslotIndex {
        serial_number
    }
}

/// Base population behavior used when no reaction ever wrote a timeslot
pub trait BaselineForecast {
    fn base_capacity(&self, current_timeslot: TimeslotIndex, timeslot: TimeslotIndex) -> f64;
}

/// Subscription- and tariff-specific corrections applied on the read path
pub trait CapacityAdjuster {
    /// Weather, seasonal and tariff correction of a single timeslot
    fn adjust_for_subscription(
        &self,
        timeslot: TimeslotIndex,
        capacity: f64,
        subscription: &Subscription,
    ) -> f64;

    /// Elasticity reshaping of a forecast window under current tariff rates
    fn adjust_for_tariff_rates(
        &self,
        profile: CapacityProfile,
        timeslot: TimeslotIndex,
        subscription: &Subscription,
    ) -> CapacityProfile;

    /// Unit and length conversion into a vector of exactly `window_length` values
    fn convert_units(&self, profile: &CapacityProfile, window_length: usize) -> Vec<f64>;
}

/// Collaborators needed by the capacity read path
#[derive(Clone, Copy)]
pub struct CapacityContext<'a> {
    pub timeslots: &'a dyn TimeslotSequence,
    pub baseline: &'a dyn BaselineForecast,
    pub adjuster: &'a dyn CapacityAdjuster,
}

impl fmt::Debug for CapacityContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityContext")
            .finish_non_exhaustive()
    }
}
