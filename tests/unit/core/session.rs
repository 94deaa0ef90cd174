//! Unit tests for market session classification

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc, Weekday};
use tradewise::config::SessionConfig;
use tradewise::core::session::{minutes_until_open, MarketSession};

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_classify_weekday_sessions() {
    let config = SessionConfig::default();
    assert_eq!(MarketSession::classify(Weekday::Mon, at(8, 59), &config), MarketSession::PreOpen);
    assert_eq!(MarketSession::classify(Weekday::Mon, at(9, 0), &config), MarketSession::PreMarket);
    assert_eq!(MarketSession::classify(Weekday::Tue, at(9, 15), &config), MarketSession::Open);
    assert_eq!(MarketSession::classify(Weekday::Fri, at(15, 30), &config), MarketSession::Open);
    assert_eq!(MarketSession::classify(Weekday::Fri, at(15, 31), &config), MarketSession::Closed);
    assert_eq!(MarketSession::classify(Weekday::Sat, at(11, 0), &config), MarketSession::Weekend);
    assert!(MarketSession::Open.is_open());
    assert!(!MarketSession::PreMarket.is_open());
}

#[test]
fn test_close_is_exact_to_the_second() {
    let config = SessionConfig::default();
    let closing = NaiveTime::from_hms_opt(15, 30, 0).unwrap();
    let after = NaiveTime::from_hms_opt(15, 30, 1).unwrap();
    let late = NaiveTime::from_hms_opt(15, 30, 59).unwrap();
    assert_eq!(MarketSession::classify(Weekday::Wed, closing, &config), MarketSession::Open);
    assert_eq!(MarketSession::classify(Weekday::Wed, after, &config), MarketSession::Closed);
    assert_eq!(MarketSession::classify(Weekday::Wed, late, &config), MarketSession::Closed);

    let opening = NaiveTime::from_hms_opt(9, 14, 59).unwrap();
    assert_eq!(MarketSession::classify(Weekday::Wed, opening, &config), MarketSession::PreMarket);
}

#[test]
fn test_utc_timestamp_mapped_to_exchange_time() {
    let config = SessionConfig::default();
    // 04:00 UTC is 09:30 IST on Monday 2025-01-06.
    let ts = Utc.with_ymd_and_hms(2025, 1, 6, 4, 0, 0).unwrap();
    assert_eq!(MarketSession::at_utc(ts, &config), MarketSession::Open);
    let ts = Utc.with_ymd_and_hms(2025, 1, 6, 10, 30, 0).unwrap();
    assert_eq!(MarketSession::at_utc(ts, &config), MarketSession::Closed);
}

#[test]
fn test_minutes_until_open() {
    let config = SessionConfig::default();
    let monday = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let friday = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let saturday = NaiveDate::from_ymd_opt(2025, 1, 11).unwrap();

    assert_eq!(minutes_until_open(monday.and_time(at(8, 0)), &config), 75);
    assert_eq!(minutes_until_open(monday.and_time(at(10, 0)), &config), 0);
    assert_eq!(minutes_until_open(friday.and_time(at(16, 0)), &config), 3915);
    assert_eq!(minutes_until_open(saturday.and_time(at(10, 0)), &config), 2835);
}
