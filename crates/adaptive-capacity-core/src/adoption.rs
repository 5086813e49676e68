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

use adaptive_capacity_types::{CapacityProfile, Subscription, TimeslotIndex};
use tracing::debug;

use crate::error::{OriginatorError, Result};
use crate::originator::AdaptiveCapacityOriginator;
use crate::traits::{ProfileRecommendation, RecommendationListener, TimeslotSequence};

/// Who a recommendation event is addressed to
#[derive(Debug, Clone, Copy)]
pub enum ReactionTarget<'a> {
    /// The whole customer population
    Population,
    /// One subscription, with its current forecast if the publisher sent one
    Subscription {
        subscription: &'a Subscription,
        own_forecast: Option<&'a CapacityProfile>,
    },
}

/// Result of one recommendation event
#[derive(Debug, Clone, PartialEq)]
pub enum ReactionOutcome {
    /// The recommendation was not noticed; nothing changed
    Ignored,
    /// A profile was chosen and written to the forecast
    Adopted {
        profile: CapacityProfile,
        rescored: bool,
    },
}

impl AdaptiveCapacityOriginator {
    /// React to one recommendation event
    ///
    /// Draw order is fixed: the notice draw, then the receptivity draw, then
    /// one selection draw under logit choice. An ignored recommendation
    /// consumes exactly one draw. On error nothing has been written.
    pub fn react<R: ProfileRecommendation>(
        &mut self,
        recommendation: &R,
        target: ReactionTarget<'_>,
        current_timeslot: TimeslotIndex,
        timeslots: &dyn TimeslotSequence,
    ) -> Result<ReactionOutcome> {
        if self.stream.next_draw() > self.structure.reactivity_factor {
            debug!("Ignoring received profile recommendation");
            return Ok(ReactionOutcome::Ignored);
        }

        let rescored_recommendation;
        let rescored = self.stream.next_draw() >= self.structure.receptivity_factor;
        let local: &R = if rescored {
            debug!("Rescoring profile recommendation locally");
            rescored_recommendation = self.rescore(recommendation);
            &rescored_recommendation
        } else {
            debug!("Adopting profile recommendation as received");
            recommendation
        };

        let chosen = self.selector.select(local, &mut self.stream)?;
        let start = timeslots.lookup(current_timeslot);

        match target {
            ReactionTarget::Population => {
                debug!("Chosen profile for population: {}", chosen);
                self.forecasts.overwrite_aggregate(start, &chosen, timeslots);
            }
            ReactionTarget::Subscription {
                subscription,
                own_forecast,
            } => {
                let opinion = local
                    .opinions()
                    .get(&chosen)
                    .ok_or(OriginatorError::MissingOpinion)?;
                let non_scaled_score = local.non_scaled_score(&chosen);

                if own_forecast.is_some_and(|own| *own != chosen) {
                    debug!("Chosen profile for {} differs from its forecast: {}", subscription, chosen);
                } else {
                    debug!("Chosen profile for {}: {}", subscription, chosen);
                }

                self.forecasts
                    .overwrite_per_subscription(start, &chosen, subscription, timeslots);
                self.inconvenience
                    .record(&chosen, opinion, non_scaled_score, subscription.tariff());
            }
        }

        Ok(ReactionOutcome::Adopted {
            profile: chosen,
            rescored,
        })
    }

    /// Local copy of the recommendation scored with this bundle's weights
    fn rescore<R: ProfileRecommendation>(&self, recommendation: &R) -> R {
        let mut local = R::from_opinions(recommendation.opinions().clone());
        local.compute_scores(&self.structure.scoring_weights());
        local.compute_utilities();
        local.compute_probabilities(self.structure.rationality_factor);
        local
    }
}

impl<R: ProfileRecommendation> RecommendationListener<R> for AdaptiveCapacityOriginator {
    fn handle_profile_recommendation(
        &mut self,
        recommendation: &R,
        current_timeslot: TimeslotIndex,
        timeslots: &dyn TimeslotSequence,
    ) -> Result<()> {
        self.react(
            recommendation,
            ReactionTarget::Population,
            current_timeslot,
            timeslots,
        )
        .map(|_| ())
    }

    fn handle_profile_recommendation_per_sub(
        &mut self,
        recommendation: &R,
        subscription: &Subscription,
        current_timeslot: TimeslotIndex,
        own_forecast: &CapacityProfile,
        timeslots: &dyn TimeslotSequence,
    ) -> Result<()> {
        self.react(
            recommendation,
            ReactionTarget::Subscription {
                subscription,
                own_forecast: Some(own_forecast),
            },
            current_timeslot,
            timeslots,
        )
        .map(|_| ())
    }
}
