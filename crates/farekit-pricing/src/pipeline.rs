//! Pipeline assembly and evaluation
//!
//! A pipeline folds a starting quantity through its stages in construction
//! order: the input of stage `i + 1` is the output of stage `i`. Pipelines
//! are immutable once built — to change the stages, build a new pipeline.

use crate::quote::{FareQuote, StageCharge};
use crate::stage::Stage;
use farekit_common::PricingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An ordered, immutable sequence of pricing stages.
///
/// Evaluation never mutates shared state, so a built pipeline can be
/// evaluated from multiple threads without coordination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPipeline {
    stages: Vec<Stage>,
}

impl PricingPipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Fold `initial` through every stage in order.
    ///
    /// Rejects a negative starting quantity. A failing stage aborts the
    /// whole evaluation — nothing is skipped or retried — and its error is
    /// wrapped with the stage's position and name. An empty pipeline returns
    /// `initial` unchanged.
    pub fn evaluate(&self, initial: Decimal) -> Result<Decimal, PricingError> {
        check_initial(initial)?;
        let mut amount = initial;
        for (index, stage) in self.stages.iter().enumerate() {
            amount = stage.apply(amount).map_err(|source| PricingError::StageFailed {
                index,
                name: stage.name(),
                source: Box::new(source),
            })?;
        }
        Ok(amount)
    }

    /// Like [`evaluate`](Self::evaluate), also recording the quantity before
    /// and after each stage.
    pub fn evaluate_itemized(
        &self,
        initial: Decimal,
    ) -> Result<(Decimal, Vec<StageCharge>), PricingError> {
        check_initial(initial)?;
        let mut amount = initial;
        let mut charges = Vec::with_capacity(self.stages.len());
        for (index, stage) in self.stages.iter().enumerate() {
            let amount_in = amount;
            amount = stage.apply(amount).map_err(|source| PricingError::StageFailed {
                index,
                name: stage.name(),
                source: Box::new(source),
            })?;
            charges.push(StageCharge {
                index,
                stage: stage.name().to_string(),
                amount_in,
                amount_out: amount,
            });
        }
        Ok((amount, charges))
    }

    /// Evaluate into a time-stamped quote with a per-stage breakdown.
    pub fn quote(&self, initial: Decimal) -> Result<FareQuote, PricingError> {
        let (total, charges) = self.evaluate_itemized(initial)?;
        Ok(FareQuote::new(initial, total, charges))
    }
}

fn check_initial(initial: Decimal) -> Result<(), PricingError> {
    if initial < Decimal::ZERO {
        return Err(PricingError::InvalidInput(format!("{initial} is negative")));
    }
    Ok(())
}

/// Collects stages for a [`PricingPipeline`].
///
/// The two build methods make the empty-pipeline policy explicit at the call
/// site: fare pipelines require at least a base-fare stage, while generic
/// adjustment pipelines treat zero stages as "no adjustment".
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    stages: Vec<Stage>,
}

impl PipelineBuilder {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Append a stage. Order of calls is evaluation order.
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stages.push(stage);
        self
    }

    /// Build, requiring at least one stage.
    pub fn build(self) -> Result<PricingPipeline, PricingError> {
        if self.stages.is_empty() {
            return Err(PricingError::EmptyPipeline);
        }
        Ok(PricingPipeline { stages: self.stages })
    }

    /// Build, accepting zero stages (the identity pipeline).
    pub fn build_allow_empty(self) -> PricingPipeline {
        PricingPipeline { stages: self.stages }
    }
}
