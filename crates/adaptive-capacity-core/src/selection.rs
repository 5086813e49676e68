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

use adaptive_capacity_types::{CapacityProfile, ProfileMap, ProfileSelectionMethod};
use tracing::debug;

use crate::error::{OriginatorError, Result};
use crate::random::ReactionStream;
use crate::traits::ProfileRecommendation;

/// Shortfall of the total probability below 1 still treated as complete
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Picks one candidate profile out of a scored recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSelector {
    method: ProfileSelectionMethod,
}

impl ProfileSelector {
    pub fn new(method: ProfileSelectionMethod) -> Self {
        Self { method }
    }

    /// Select using the configured policy
    ///
    /// Only `LogitChoice` consumes a draw from the stream.
    pub fn select<R: ProfileRecommendation>(
        &self,
        recommendation: &R,
        stream: &mut ReactionStream,
    ) -> Result<CapacityProfile> {
        match self.method {
            ProfileSelectionMethod::BestUtility => select_best_utility(recommendation.utilities()),
            ProfileSelectionMethod::LogitChoice => {
                let draw = stream.next_draw();
                debug!("Logit draw {:.6}", draw);
                draw_from_probabilities(recommendation.probabilities(), draw)
            }
        }
    }
}

/// Candidate with the strictly greatest utility
///
/// Ties go to the first candidate in map order; NaN utilities never win.
pub fn select_best_utility(utilities: &ProfileMap<f64>) -> Result<CapacityProfile> {
    let mut best: Option<(&CapacityProfile, f64)> = None;
    for (profile, &utility) in utilities.iter() {
        if utility.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, best_utility)| utility > best_utility) {
            best = Some((profile, utility));
        }
    }
    best.map(|(profile, _)| profile.clone())
        .ok_or(OriginatorError::NoUtilities)
}

/// Candidate whose cumulative-probability slice contains `draw`
///
/// Slices are laid out in ascending order of probability (stable for equal
/// probabilities), which fixes the mapping from draw to candidate regardless
/// of how the map was built. If rounding leaves the total just short of 1,
/// the most probable candidate owns the remainder.
pub fn draw_from_probabilities(
    probabilities: &ProfileMap<f64>,
    draw: f64,
) -> Result<CapacityProfile> {
    let mut entries: Vec<(&CapacityProfile, f64)> =
        probabilities.iter().map(|(p, &v)| (p, v)).collect();
    entries.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut cumulative = 0.0;
    for (profile, probability) in &entries {
        cumulative += probability;
        if draw < cumulative {
            return Ok((*profile).clone());
        }
    }

    match entries.last() {
        Some((profile, _)) if 1.0 - cumulative <= PROBABILITY_TOLERANCE => {
            debug!(
                "Cumulative probability {} short of 1, assigning remainder",
                cumulative
            );
            Ok((*profile).clone())
        }
        _ => Err(OriginatorError::DrawUnresolved {
            draw,
            total: cumulative,
        }),
    }
}
