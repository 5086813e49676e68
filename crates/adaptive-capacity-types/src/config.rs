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

use anyhow::{Context, Result, bail};
use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::recommendation::ScoringWeights;

// ============= Optimizer Structure =============

/// How a reacting population picks one candidate out of a scored recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfileSelectionMethod {
    /// Candidate with the greatest utility
    BestUtility,
    /// Random draw weighted by the recommendation's choice probabilities
    LogitChoice,
}

/// Behavioral parameters of one customer bundle's reaction to recommendations
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerStructure {
    /// Probability that a recommendation is noticed at all (0.0 to 1.0)
    #[serde(default = "default_reactivity_factor")]
    pub reactivity_factor: f64,

    /// Probability that a noticed recommendation is adopted without rescoring (0.0 to 1.0)
    #[serde(default = "default_receptivity_factor")]
    pub receptivity_factor: f64,

    /// Weight of the behavioral-change term when rescoring
    #[serde(default = "default_profile_change_weight")]
    pub profile_change_weight: f64,

    /// Weight of the bundle-value term when rescoring
    #[serde(default = "default_bundle_value_weight")]
    pub bundle_value_weight: f64,

    /// Logit sharpness used when rescoring turns utilities into probabilities
    #[serde(default = "default_rationality_factor")]
    pub rationality_factor: f64,

    #[serde(default = "default_profile_selection_method")]
    pub profile_selection_method: ProfileSelectionMethod,
}

fn default_reactivity_factor() -> f64 {
    1.0
}
fn default_receptivity_factor() -> f64 {
    0.0
}
fn default_profile_change_weight() -> f64 {
    1.0
}
fn default_bundle_value_weight() -> f64 {
    1.0
}
fn default_rationality_factor() -> f64 {
    1.0
}
fn default_profile_selection_method() -> ProfileSelectionMethod {
    ProfileSelectionMethod::LogitChoice
}

impl Default for OptimizerStructure {
    fn default() -> Self {
        Self {
            reactivity_factor: default_reactivity_factor(),
            receptivity_factor: default_receptivity_factor(),
            profile_change_weight: default_profile_change_weight(),
            bundle_value_weight: default_bundle_value_weight(),
            rationality_factor: default_rationality_factor(),
            profile_selection_method: default_profile_selection_method(),
        }
    }
}

impl OptimizerStructure {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let structure: Self =
            toml::from_str(content).context("Failed to parse optimizer structure TOML")?;
        structure.validate()?;
        Ok(structure)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read optimizer structure: {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.reactivity_factor) {
            bail!(
                "reactivity_factor must be within [0, 1], got {}",
                self.reactivity_factor
            );
        }
        if !(0.0..=1.0).contains(&self.receptivity_factor) {
            bail!(
                "receptivity_factor must be within [0, 1], got {}",
                self.receptivity_factor
            );
        }
        for (name, value) in [
            ("profile_change_weight", self.profile_change_weight),
            ("bundle_value_weight", self.bundle_value_weight),
            ("rationality_factor", self.rationality_factor),
        ] {
            if !value.is_finite() {
                bail!("{name} must be a finite number, got {value}");
            }
        }
        Ok(())
    }

    /// Weights used when a noticed recommendation is rescored locally
    pub fn scoring_weights(&self) -> ScoringWeights {
        ScoringWeights {
            profile_change: self.profile_change_weight,
            bundle_value: self.bundle_value_weight,
        }
    }
}
