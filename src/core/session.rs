//! Exchange session classification in exchange-local time.

use crate::config::SessionConfig;
use chrono::{DateTime, Datelike, Duration, NaiveDateTime, NaiveTime, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarketSession {
    Weekend,
    /// Before the pre-market window.
    PreOpen,
    PreMarket,
    Open,
    Closed,
}

impl MarketSession {
    /// Open runs through the close time itself, to the second.
    pub fn classify(weekday: Weekday, time: NaiveTime, config: &SessionConfig) -> Self {
        if is_weekend(weekday) {
            return MarketSession::Weekend;
        }

        let secs = time.num_seconds_from_midnight();
        if secs < config.pre_market_minute * 60 {
            MarketSession::PreOpen
        } else if secs < config.open_minute * 60 {
            MarketSession::PreMarket
        } else if secs <= config.close_minute * 60 {
            MarketSession::Open
        } else {
            MarketSession::Closed
        }
    }

    pub fn at(now: NaiveDateTime, config: &SessionConfig) -> Self {
        Self::classify(now.weekday(), now.time(), config)
    }

    pub fn at_utc(timestamp: DateTime<Utc>, config: &SessionConfig) -> Self {
        Self::at(exchange_time(timestamp, config), config)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MarketSession::Open)
    }
}

impl fmt::Display for MarketSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MarketSession::Weekend => "Weekend - Markets Closed",
            MarketSession::PreOpen => "Pre-market - Not yet open",
            MarketSession::PreMarket => "Pre-market Session",
            MarketSession::Open => "Market is OPEN",
            MarketSession::Closed => "Market Closed for Today",
        })
    }
}

/// Whole minutes until the next session open; 0 while the market is open.
pub fn minutes_until_open(now: NaiveDateTime, config: &SessionConfig) -> i64 {
    if MarketSession::at(now, config).is_open() {
        return 0;
    }

    let mut day = now.date();
    let past_open = now.time().num_seconds_from_midnight() >= config.open_minute * 60;
    if is_weekend(day.weekday()) || past_open {
        day += Duration::days(1);
    }
    while is_weekend(day.weekday()) {
        day += Duration::days(1);
    }

    let open = day.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(config.open_minute));
    (open - now).num_minutes()
}

/// Exchange-local wall clock for a UTC instant.
pub fn exchange_time(timestamp: DateTime<Utc>, config: &SessionConfig) -> NaiveDateTime {
    timestamp.naive_utc() + Duration::minutes(i64::from(config.utc_offset_minutes))
}

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
