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

/// Serial number of a simulation timeslot
pub type TimeslotIndex = u32;

/// Tariff identity, stable for the whole simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TariffId(pub u64);

impl fmt::Display for TariffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tariff-{}", self.0)
    }
}

/// Customer population identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub String);

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A customer population subscribed to one tariff
///
/// Only used as a lookup key; the subscription lifecycle lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Subscription {
    customer: CustomerId,
    tariff: TariffId,
}

impl Subscription {
    pub fn new(customer: impl Into<String>, tariff: TariffId) -> Self {
        Self {
            customer: CustomerId(customer.into()),
            tariff,
        }
    }

    pub fn customer(&self) -> &CustomerId {
        &self.customer
    }

    pub fn tariff(&self) -> TariffId {
        self.tariff
    }
}

impl fmt::Display for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.customer, self.tariff)
    }
}
