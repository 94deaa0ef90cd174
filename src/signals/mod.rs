//! Signal scoring, recommendation resolution and the advisory pipeline.

pub mod decision;
pub mod engine;
pub mod scoring;

pub use decision::{risk_reward, RecommendationResolver};
pub use engine::{Advisory, AdvisoryEngine};
pub use scoring::SignalScorer;
