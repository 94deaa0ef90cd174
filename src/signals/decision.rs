//! Maps (signal score, risk score) to an action with entry, targets and stop.

use crate::indicators::structure::calculate_pivots;
use crate::models::indicators::IndicatorSet;
use crate::models::market::MarketSnapshot;
use crate::models::recommendation::{Action, Confidence, PivotLevels, Recommendation};
use tracing::info;

#[derive(Debug, Clone, Copy)]
enum ScoreBound {
    AtLeast(i32),
    AtMost(i32),
    Any,
}

#[derive(Debug, Clone, Copy)]
enum RiskBound {
    Below(u32),
    AtLeast(u32),
}

#[derive(Debug, Clone, Copy)]
struct DecisionRule {
    score: ScoreBound,
    risk: RiskBound,
    action: Action,
}

impl DecisionRule {
    fn matches(&self, signal_score: i32, risk_score: u32) -> bool {
        let score_ok = match self.score {
            ScoreBound::AtLeast(min) => signal_score >= min,
            ScoreBound::AtMost(max) => signal_score <= max,
            ScoreBound::Any => true,
        };
        let risk_ok = match self.risk {
            RiskBound::Below(max) => risk_score < max,
            RiskBound::AtLeast(min) => risk_score >= min,
        };
        score_ok && risk_ok
    }
}

/// Checked in order; the first matching rule wins, `HoldWait` otherwise.
const DECISION_TABLE: [DecisionRule; 5] = [
    DecisionRule {
        score: ScoreBound::AtLeast(6),
        risk: RiskBound::Below(60),
        action: Action::StrongBuy,
    },
    DecisionRule {
        score: ScoreBound::AtLeast(3),
        risk: RiskBound::Below(70),
        action: Action::Buy,
    },
    DecisionRule {
        score: ScoreBound::AtMost(-6),
        risk: RiskBound::Below(60),
        action: Action::StrongSell,
    },
    DecisionRule {
        score: ScoreBound::AtMost(-3),
        risk: RiskBound::Below(70),
        action: Action::Sell,
    },
    DecisionRule {
        score: ScoreBound::Any,
        risk: RiskBound::AtLeast(75),
        action: Action::StayOut,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationResolver;

impl RecommendationResolver {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve_action(signal_score: i32, risk_score: u32) -> Action {
        DECISION_TABLE
            .iter()
            .find(|rule| rule.matches(signal_score, risk_score))
            .map(|rule| rule.action)
            .unwrap_or(Action::HoldWait)
    }

    pub fn resolve(
        &self,
        signal_score: i32,
        risk_score: u32,
        snapshot: &MarketSnapshot,
        indicators: &IndicatorSet,
    ) -> Recommendation {
        let action = Self::resolve_action(signal_score, risk_score);
        let entry = snapshot.last_price();
        let atr = indicators.atr_value();
        let levels = calculate_pivots(snapshot.high(), snapshot.low(), entry);
        let (target1, target2, stop_loss) = Self::levels_for(action, entry, atr, &levels);
        let (confidence, rationale, position_size) = Self::guidance(action);

        let recommendation = Recommendation {
            action,
            confidence,
            rationale: rationale.to_string(),
            position_size: position_size.to_string(),
            signal_score,
            risk_score,
            entry,
            target1,
            target2,
            stop_loss,
            risk_reward: risk_reward(entry, target1, stop_loss),
            levels,
        };

        info!(
            action = %recommendation.action,
            signal_score,
            risk_score,
            entry = recommendation.entry,
            target1 = recommendation.target1,
            stop_loss = recommendation.stop_loss,
            "RecommendationResolver: resolved recommendation"
        );

        recommendation
    }

    /// Directional actions use ATR offsets; non-directional ones fall back to
    /// pivot resistance and support.
    fn levels_for(action: Action, entry: f64, atr: f64, levels: &PivotLevels) -> (f64, f64, f64) {
        match action {
            Action::StrongBuy => (entry + atr * 1.5, levels.r1, entry - atr),
            Action::Buy => (entry + atr, levels.r1, entry - atr),
            Action::StrongSell => (entry - atr * 1.5, levels.s1, entry + atr),
            Action::Sell => (entry - atr, levels.s1, entry + atr),
            Action::StayOut | Action::HoldWait => (levels.r1, levels.r2, levels.s1),
        }
    }

    fn guidance(action: Action) -> (Confidence, &'static str, &'static str) {
        match action {
            Action::StrongBuy => (
                Confidence::High,
                "Strong bullish signals with acceptable risk",
                "75-100% of planned allocation",
            ),
            Action::Buy => (
                Confidence::Moderate,
                "Positive signals with manageable risk",
                "50-75% of planned allocation",
            ),
            Action::StrongSell => (
                Confidence::High,
                "Strong bearish signals with acceptable risk",
                "75-100% of planned allocation",
            ),
            Action::Sell => (
                Confidence::Moderate,
                "Negative signals with manageable risk",
                "50-75% of planned allocation",
            ),
            Action::StayOut => (
                Confidence::High,
                "Risk too high - market conditions unfavorable",
                "0% - Do not trade",
            ),
            Action::HoldWait => (
                Confidence::Neutral,
                "Mixed signals - wait for clearer direction",
                "25-50% or wait",
            ),
        }
    }
}

/// |target - entry| / |entry - stop|; zero when the stop sits on the entry.
pub fn risk_reward(entry: f64, target: f64, stop_loss: f64) -> f64 {
    let potential_loss = (entry - stop_loss).abs();
    if potential_loss > 0.0 {
        (target - entry).abs() / potential_loss
    } else {
        0.0
    }
}
