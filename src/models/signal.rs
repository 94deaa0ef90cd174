use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignalFactor {
    Trend,
    Momentum,
    Macd,
    Volatility,
    Volume,
    Breadth,
    IntradayPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalReason {
    pub factor: SignalFactor,
    pub description: String,
    pub contribution: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalAssessment {
    /// Signed sum of factor contributions, within -15..=15.
    pub signal_score: i32,
    pub reasons: Vec<SignalReason>,
}

impl SignalAssessment {
    /// Rationale strings in evaluation order.
    pub fn rationale(&self) -> Vec<&str> {
        self.reasons.iter().map(|r| r.description.as_str()).collect()
    }

    pub fn contribution_of(&self, factor: SignalFactor) -> i32 {
        self.reasons
            .iter()
            .filter(|r| r.factor == factor)
            .map(|r| r.contribution)
            .sum()
    }
}
