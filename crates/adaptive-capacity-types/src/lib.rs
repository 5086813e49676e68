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

pub mod config;
pub mod identity;
pub mod profile;
pub mod recommendation;

// Re-export common types for convenience
pub use config::{OptimizerStructure, ProfileSelectionMethod};
pub use identity::{CustomerId, Subscription, TariffId, TimeslotIndex};
pub use profile::{CapacityProfile, NUM_TIMESLOTS, ProfileError, ProfileMap};
pub use recommendation::{Opinion, ScoringFactor, ScoringWeights};
