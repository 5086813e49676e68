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

//! Error types for the adaptive capacity core
//!
//! Every variant is an invariant violation caused by a corrupted recommendation
//! or adjustment. The host is expected to abort the simulation run on any of them.

use adaptive_capacity_types::TimeslotIndex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum OriginatorError {
    #[error("best-utility selection found no candidate profile")]
    NoUtilities,

    #[error("logit draw {draw} not covered by cumulative probability {total}")]
    DrawUnresolved { draw: f64, total: f64 },

    #[error("chosen profile has no opinion in the recommendation")]
    MissingOpinion,

    #[error("adjusted capacity is NaN for timeslot {timeslot} (forecast capacity = {forecast})")]
    NanCapacity {
        timeslot: TimeslotIndex,
        forecast: f64,
    },

    #[error("expected {expected} predicted values, got {actual}")]
    ProfileLength { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, OriginatorError>;
