//! # Farekit Pricing
//!
//! Composable pricing pipeline: an ordered list of pure stages folded over a
//! starting quantity.
//!
//! ```text
//! total = stage_n(... stage_2(stage_1(initial)))
//! ```
//!
//! - Stage parameters are validated at construction; a built [`Stage`] cannot
//!   fail on valid (non-negative) input short of arithmetic overflow.
//! - A [`PricingPipeline`] is immutable once built. Stage order defines
//!   evaluation order, and order matters: a surcharge before a discount
//!   prices differently than the reverse.
//! - Evaluation is deterministic and side-effect free. The pipeline never
//!   logs; rendering and observability belong to the caller.

pub mod pipeline;
pub mod quote;
pub mod settings;
pub mod stage;

pub use pipeline::{PipelineBuilder, PricingPipeline};
pub use quote::{FareQuote, StageCharge};
pub use settings::PricingSettings;
pub use stage::Stage;
