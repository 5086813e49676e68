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

//! Adaptive capacity core
//!
//! Decides how a customer population subscribed to a tariff reacts to
//! published capacity-profile recommendations, and keeps the resulting
//! forecasts so the simulation can ask what the population uses now and what
//! it is predicted to use next.
//!
//! ## Flow
//!
//! - **Adoption**: a recommendation is noticed with probability
//!   `reactivity_factor`, then adopted verbatim with probability
//!   `receptivity_factor` or rescored with the bundle's own weights
//! - **Selection**: best utility or a logit draw picks one profile
//! - **Forecast**: the profile overwrites the population or subscription forecast
//! - **Query**: capacity used per timeslot and predicted energy windows

pub mod adoption;
pub mod capacity_query;
pub mod error;
pub mod forecast_store;
pub mod inconvenience;
pub mod originator;
pub mod random;
pub mod selection;
pub mod traits;

#[cfg(test)]
mod test_support;

pub use adaptive_capacity_types::*;
pub use adoption::{ReactionOutcome, ReactionTarget};
pub use capacity_query::truncate_to_two_decimals;
pub use error::{OriginatorError, Result};
pub use forecast_store::{ForecastSnapshot, ForecastStore, SubscriptionForecast, TimeslotCapacity};
pub use inconvenience::InconvenienceTracker;
pub use originator::AdaptiveCapacityOriginator;
pub use random::{ReactionStream, SeedProvider};
pub use selection::{PROBABILITY_TOLERANCE, ProfileSelector};
pub use traits::{
    BaselineForecast, CapacityAdjuster, CapacityContext, ContiguousTimeslots,
    ProfileRecommendation, RecommendationListener, TimeslotSequence,
};
