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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Number of timeslots covered by one capacity profile (one day of hourly slots)
pub const NUM_TIMESLOTS: usize = 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("capacity profile needs {expected} values, got {actual}")]
    Length { expected: usize, actual: usize },
}

// ============= Capacity Profile =============

/// Fixed-length forecast of per-timeslot capacity
///
/// Values are signed: positive is consumption, negative is production.
/// Offset `i` refers to the `i`-th timeslot after the window start.
/// Equality and hashing compare the exact bit pattern of every value, so two
/// profiles are the same key only if their value sequences are identical.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CapacityProfile {
    values: Vec<f64>,
}

impl CapacityProfile {
    /// Build a profile from exactly `NUM_TIMESLOTS` values
    pub fn new(values: Vec<f64>) -> Result<Self, ProfileError> {
        if values.len() != NUM_TIMESLOTS {
            return Err(ProfileError::Length {
                expected: NUM_TIMESLOTS,
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Profile with the same capacity in every timeslot
    pub fn uniform(capacity: f64) -> Self {
        Self {
            values: vec![capacity; NUM_TIMESLOTS],
        }
    }

    /// Build a profile by calling `f` for offsets `0..NUM_TIMESLOTS` in order
    pub fn from_fn(f: impl FnMut(usize) -> f64) -> Self {
        Self {
            values: (0..NUM_TIMESLOTS).map(f).collect(),
        }
    }

    /// Capacity at `offset` from the window start
    ///
    /// Panics if `offset >= NUM_TIMESLOTS`.
    pub fn capacity(&self, offset: usize) -> f64 {
        self.values[offset]
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Sum over the whole window
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl PartialEq for CapacityProfile {
    fn eq(&self, other: &Self) -> bool {
        self.values
            .iter()
            .zip(&other.values)
            .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for CapacityProfile {}

impl Hash for CapacityProfile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for value in &self.values {
            value.to_bits().hash(state);
        }
    }
}

impl TryFrom<Vec<f64>> for CapacityProfile {
    type Error = ProfileError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<CapacityProfile> for Vec<f64> {
    fn from(profile: CapacityProfile) -> Self {
        profile.values
    }
}

impl fmt::Display for CapacityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value:.2}")?;
        }
        write!(f, "]")
    }
}

// ============= Profile-keyed Map =============

/// Mapping keyed by capacity profile that iterates in insertion order
///
/// Recommendations carry only a handful of candidates, so lookups scan the
/// entries. Re-inserting an existing profile replaces its value in place and
/// keeps its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileMap<V> {
    entries: Vec<(CapacityProfile, V)>,
}

impl<V> ProfileMap<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace, returning the previous value for this profile
    pub fn insert(&mut self, profile: CapacityProfile, value: V) -> Option<V> {
        match self.entries.iter_mut().find(|(p, _)| *p == profile) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((profile, value));
                None
            }
        }
    }

    pub fn get(&self, profile: &CapacityProfile) -> Option<&V> {
        self.entries
            .iter()
            .find(|(p, _)| p == profile)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&CapacityProfile, &V)> + '_ {
        self.entries.iter().map(|(p, v)| (p, v))
    }
}

impl<V> Default for ProfileMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> FromIterator<(CapacityProfile, V)> for ProfileMap<V> {
    fn from_iter<I: IntoIterator<Item = (CapacityProfile, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (profile, value) in iter {
            map.insert(profile, value);
        }
        map
    }
}
