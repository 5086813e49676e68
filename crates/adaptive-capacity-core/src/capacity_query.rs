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

use adaptive_capacity_types::{CapacityProfile, Subscription, TariffId, TimeslotIndex};
use tracing::trace;

use crate::error::{OriginatorError, Result};
use crate::originator::AdaptiveCapacityOriginator;
use crate::traits::CapacityContext;

/// Slack added away from zero before truncating, in hundredths
const TRUNCATION_EPSILON: f64 = 1e-9;

/// Truncate toward zero at the third decimal
///
/// `0.29 * 100.0` lands just below 29, so the scaled value is nudged away from
/// zero before truncation to keep decimals that are exactly representable in
/// hundredths.
pub fn truncate_to_two_decimals(value: f64) -> f64 {
    let scaled = value * 100.0;
    (scaled + scaled.signum() * TRUNCATION_EPSILON).trunc() / 100.0
}

impl AdaptiveCapacityOriginator {
    /// Capacity this subscription actually uses (or produces) in `current_timeslot`
    ///
    /// The value is recorded as the actual capacity of the timeslot.
    pub fn use_capacity(
        &mut self,
        subscription: &Subscription,
        current_timeslot: TimeslotIndex,
        ctx: &CapacityContext<'_>,
    ) -> Result<f64> {
        let forecast = self.forecasts.read_per_subscription(
            current_timeslot,
            current_timeslot,
            subscription,
            ctx.baseline,
        );

        let adjusted = ctx
            .adjuster
            .adjust_for_subscription(current_timeslot, forecast, subscription);
        if adjusted.is_nan() {
            return Err(OriginatorError::NanCapacity {
                timeslot: current_timeslot,
                forecast,
            });
        }

        let capacity = truncate_to_two_decimals(adjusted);
        trace!(
            "{} uses {} in timeslot {} (forecast {})",
            subscription, capacity, current_timeslot, forecast
        );
        self.actual_capacities.insert(current_timeslot, capacity);
        Ok(capacity)
    }

    /// Last capacity recorded by `use_capacity` for a timeslot
    pub fn actual_capacity(&self, timeslot: TimeslotIndex) -> Option<f64> {
        self.actual_capacities.get(&timeslot).copied()
    }

    /// Personalized forecast window starting now
    pub fn current_forecast(
        &self,
        subscription: &Subscription,
        current_timeslot: TimeslotIndex,
        ctx: &CapacityContext<'_>,
    ) -> CapacityProfile {
        self.forecasts.forecast_window_from(
            current_timeslot,
            current_timeslot,
            subscription,
            ctx.timeslots,
            ctx.baseline,
        )
    }

    /// Predicted energy trajectory of `window_length` values for outside consumers
    pub fn predicted_energy(
        &self,
        subscription: &Subscription,
        window_length: usize,
        current_timeslot: TimeslotIndex,
        ctx: &CapacityContext<'_>,
    ) -> Result<Vec<f64>> {
        let forecast = self.current_forecast(subscription, current_timeslot, ctx);
        let reshaped = ctx
            .adjuster
            .adjust_for_tariff_rates(forecast, current_timeslot, subscription);

        let predicted = ctx.adjuster.convert_units(&reshaped, window_length);
        if predicted.len() != window_length {
            return Err(OriginatorError::ProfileLength {
                expected: window_length,
                actual: predicted.len(),
            });
        }
        Ok(predicted)
    }

    /// Behavioral switching cost of the tariff over `window_length` timeslots
    pub fn shifting_inconvenience_factor(&self, tariff: TariffId, window_length: usize) -> f64 {
        self.inconvenience.query(tariff, window_length)
    }
}
