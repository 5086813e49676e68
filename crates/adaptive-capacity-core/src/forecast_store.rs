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

use adaptive_capacity_types::{CapacityProfile, NUM_TIMESLOTS, Subscription, TimeslotIndex};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::iter;
use tracing::trace;

use crate::traits::{BaselineForecast, TimeslotSequence};

/// Rolling capacity forecasts written by reactions to recommendations
///
/// Entries are keyed by absolute timeslot. A write replaces whatever the
/// window covered before; entries outside the window are left alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastStore {
    /// Forecast for the whole population
    aggregate: BTreeMap<TimeslotIndex, f64>,

    /// Personalized forecasts, created lazily on first write
    per_subscription: HashMap<Subscription, BTreeMap<TimeslotIndex, f64>>,
}

/// `NUM_TIMESLOTS` consecutive timeslots starting at `start`
fn window(start: TimeslotIndex, timeslots: &dyn TimeslotSequence) -> Vec<TimeslotIndex> {
    iter::successors(Some(start), |&slot| Some(timeslots.next(slot)))
        .take(NUM_TIMESLOTS)
        .collect()
}

impl ForecastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the population forecast for the window starting at `start`
    pub fn overwrite_aggregate(
        &mut self,
        start: TimeslotIndex,
        profile: &CapacityProfile,
        timeslots: &dyn TimeslotSequence,
    ) {
        for (slot, capacity) in window(start, timeslots).into_iter().zip(profile.iter()) {
            trace!("aggregate forecast[{}] = {}", slot, capacity);
            self.aggregate.insert(slot, capacity);
        }
    }

    /// Overwrite one subscription's forecast for the window starting at `start`
    pub fn overwrite_per_subscription(
        &mut self,
        start: TimeslotIndex,
        profile: &CapacityProfile,
        subscription: &Subscription,
        timeslots: &dyn TimeslotSequence,
    ) {
        let forecast = self
            .per_subscription
            .entry(subscription.clone())
            .or_default();
        for (slot, capacity) in window(start, timeslots).into_iter().zip(profile.iter()) {
            trace!("forecast[{}][{}] = {}", subscription, slot, capacity);
            forecast.insert(slot, capacity);
        }
    }

    /// Stored population forecast, if any reaction wrote this timeslot
    pub fn aggregate_value(&self, timeslot: TimeslotIndex) -> Option<f64> {
        self.aggregate.get(&timeslot).copied()
    }

    /// Stored personalized forecast, if any reaction wrote this timeslot
    pub fn per_subscription_value(
        &self,
        subscription: &Subscription,
        timeslot: TimeslotIndex,
    ) -> Option<f64> {
        self.per_subscription
            .get(subscription)
            .and_then(|forecast| forecast.get(&timeslot))
            .copied()
    }

    /// Population forecast, falling back to the bundle's base behavior
    pub fn read_aggregate(
        &self,
        current_timeslot: TimeslotIndex,
        timeslot: TimeslotIndex,
        baseline: &dyn BaselineForecast,
    ) -> f64 {
        self.aggregate_value(timeslot)
            .unwrap_or_else(|| baseline.base_capacity(current_timeslot, timeslot))
    }

    /// Personalized forecast, falling back to the population forecast
    ///
    /// The fallback is silent: a miss is normal steady-state behavior.
    pub fn read_per_subscription(
        &self,
        current_timeslot: TimeslotIndex,
        timeslot: TimeslotIndex,
        subscription: &Subscription,
        baseline: &dyn BaselineForecast,
    ) -> f64 {
        match self.per_subscription_value(subscription, timeslot) {
            Some(capacity) => capacity,
            None => self.read_aggregate(current_timeslot, timeslot, baseline),
        }
    }

    /// Personalized forecast for the window starting at `start`
    pub fn forecast_window_from(
        &self,
        current_timeslot: TimeslotIndex,
        start: TimeslotIndex,
        subscription: &Subscription,
        timeslots: &dyn TimeslotSequence,
        baseline: &dyn BaselineForecast,
    ) -> CapacityProfile {
        let slots = window(start, timeslots);
        CapacityProfile::from_fn(|offset| {
            self.read_per_subscription(current_timeslot, slots[offset], subscription, baseline)
        })
    }

    /// Drop every personalized forecast; the population forecast stays
    pub fn reset(&mut self) {
        self.per_subscription.clear();
    }

    pub fn subscription_count(&self) -> usize {
        self.per_subscription.len()
    }

    /// Ordered copy of both forecasts for persistence or publishing
    pub fn snapshot(&self) -> ForecastSnapshot {
        let mut per_subscription: Vec<SubscriptionForecast> = self
            .per_subscription
            .iter()
            .map(|(subscription, forecast)| SubscriptionForecast {
                subscription: subscription.clone(),
                capacities: TimeslotCapacity::collect(forecast),
            })
            .collect();
        per_subscription.sort_by(|a, b| a.subscription.cmp(&b.subscription));

        ForecastSnapshot {
            aggregate: TimeslotCapacity::collect(&self.aggregate),
            per_subscription,
        }
    }
}

// ============= Snapshot =============

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeslotCapacity {
    pub timeslot: TimeslotIndex,
    pub capacity: f64,
}

impl TimeslotCapacity {
    fn collect(forecast: &BTreeMap<TimeslotIndex, f64>) -> Vec<Self> {
        forecast
            .iter()
            .map(|(&timeslot, &capacity)| Self { timeslot, capacity })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionForecast {
    pub subscription: Subscription,
    pub capacities: Vec<TimeslotCapacity>,
}

/// Timeslot-ordered view of a forecast store, subscriptions sorted by key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSnapshot {
    pub aggregate: Vec<TimeslotCapacity>,
    pub per_subscription: Vec<SubscriptionForecast>,
}
