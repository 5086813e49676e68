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

use adaptive_capacity_types::{OptimizerStructure, TimeslotIndex};
use bevy_ecs::prelude::Component;
use std::collections::BTreeMap;
use tracing::info;

use crate::forecast_store::ForecastStore;
use crate::inconvenience::InconvenienceTracker;
use crate::random::{ReactionStream, SeedProvider};
use crate::selection::ProfileSelector;

/// Component name under which the reaction seed is requested
pub const SEED_COMPONENT: &str = "AdaptiveCapacityOriginator";

/// Purpose under which the reaction seed is requested
pub const SEED_PURPOSE: &str = "RecommendationHandler";

/// Adaptive capacity state of one customer-population bundle
///
/// Owns the reaction stream, both forecasts, the per-tariff inconvenience and
/// the record of capacities actually used. Nothing here is shared between
/// bundles.
#[derive(Component, Debug)]
pub struct AdaptiveCapacityOriginator {
    pub(crate) structure: OptimizerStructure,
    pub(crate) selector: ProfileSelector,
    pub(crate) stream: ReactionStream,
    pub(crate) forecasts: ForecastStore,
    pub(crate) inconvenience: InconvenienceTracker,
    pub(crate) actual_capacities: BTreeMap<TimeslotIndex, f64>,
}

impl AdaptiveCapacityOriginator {
    /// Create an originator seeded from the simulation's seed provider
    pub fn new(
        structure: OptimizerStructure,
        seeds: &dyn SeedProvider,
        instance_id: u64,
    ) -> Self {
        let seed = seeds.random_seed(SEED_COMPONENT, instance_id, SEED_PURPOSE);
        info!(
            "Adaptive capacity originator {} seeded from provider ({:?})",
            instance_id, structure.profile_selection_method
        );
        Self::with_seed(structure, seed)
    }

    /// Create an originator from an explicit seed
    pub fn with_seed(structure: OptimizerStructure, seed: u64) -> Self {
        Self {
            selector: ProfileSelector::new(structure.profile_selection_method),
            structure,
            stream: ReactionStream::from_seed(seed),
            forecasts: ForecastStore::new(),
            inconvenience: InconvenienceTracker::new(),
            actual_capacities: BTreeMap::new(),
        }
    }

    pub fn structure(&self) -> &OptimizerStructure {
        &self.structure
    }

    pub fn forecasts(&self) -> &ForecastStore {
        &self.forecasts
    }

    pub fn inconvenience(&self) -> &InconvenienceTracker {
        &self.inconvenience
    }

    /// Draws taken from the reaction stream so far
    pub fn draws_consumed(&self) -> u64 {
        self.stream.draws_consumed()
    }

    /// Drop subscription-related forecasts, e.g. across a tariff revision
    ///
    /// The population forecast and the inconvenience record survive.
    pub fn reset(&mut self) {
        self.forecasts.reset();
    }
}
