use chrono::{Datelike, NaiveDate};
use daystorelease::date::{format_date, parse_date};
use daystorelease::LatencyError;

#[test]
fn valid_dates_keep_their_year_month_day() {
    for (input, y, m, d) in [
        ("2014-03-20", 2014, 3, 20),
        ("1999-12-31", 1999, 12, 31),
        ("2016-02-29", 2016, 2, 29),
        ("2024-01-01", 2024, 1, 1),
    ] {
        let date = parse_date(input).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (y, m, d), "{input}");
        assert_eq!(format_date(&date), input);
    }
}

#[test]
fn surrounding_quotes_and_whitespace_are_ignored() {
    let expected = NaiveDate::from_ymd_opt(2014, 3, 20).unwrap();
    assert_eq!(parse_date("\"2014-03-20\"").unwrap(), expected);
    assert_eq!(parse_date("  2014-03-20 ").unwrap(), expected);
    assert_eq!(parse_date("\"2014-03-20").unwrap(), expected);
}

#[test]
fn rejects_anything_but_yyyy_mm_dd() {
    for input in [
        "",
        "\"\"",
        "2014/03/20",
        "20-03-2014",
        "2014-13-01",
        "2014-02-30",
        "2014-3-20",
        "2014-03-2a",
        "2014-03-20 12:00",
        "today",
    ] {
        match parse_date(input) {
            Err(LatencyError::InvalidDateFormat(raw)) => assert_eq!(raw, input),
            other => panic!("expected InvalidDateFormat for {input:?}, got {other:?}"),
        }
    }
}
