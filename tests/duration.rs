#[cfg(test)]
mod tests {
    use chrono::Duration;
    use ttrack::timelog::duration::{parse_duration, TALLY_QUANTUM_MINUTES};
    use ttrack::timelog::ErrorKind;

    #[test]
    fn test_compound_units() {
        let cases = [
            ("1h15m", Duration::minutes(75)),
            ("2h", Duration::hours(2)),
            ("45m", Duration::minutes(45)),
            ("0h30m", Duration::minutes(30)),
            ("10h5m", Duration::minutes(605)),
        ];
        for (token, expected) in cases {
            let spent = parse_duration(token).unwrap();
            assert_eq!(spent.time, expected, "token {}", token);
            assert_eq!(spent.raw, token);
        }
    }

    #[test]
    fn test_compound_units_in_any_order() {
        assert_eq!(parse_duration("15m1h").unwrap().time, Duration::minutes(75));
        assert_eq!(parse_duration("1h1h30m").unwrap().time, Duration::minutes(150));
    }

    #[test]
    fn test_dotted_tally() {
        assert_eq!(parse_duration(".").unwrap().time, Duration::minutes(15));
        assert_eq!(parse_duration("..").unwrap().time, Duration::minutes(30));
        assert_eq!(parse_duration("...").unwrap().time, Duration::minutes(45));
        assert_eq!(
            parse_duration("........").unwrap().time,
            Duration::minutes(8 * TALLY_QUANTUM_MINUTES)
        );
        assert_eq!(parse_duration("..").unwrap().raw, "..");
    }

    #[test]
    fn test_time_range() {
        let spent = parse_duration("13:00-13:20").unwrap();
        assert_eq!(spent.time, Duration::minutes(20));
        assert_eq!(spent.raw, "13:00-13:20");
        assert_eq!(parse_duration("09:15-17:45").unwrap().time, Duration::minutes(510));
    }

    #[test]
    fn test_reversed_range_is_an_error() {
        assert_eq!(
            parse_duration("13:20-13:00"),
            Err(ErrorKind::NegativeDurationRange("13:20-13:00".to_string()))
        );
    }

    #[test]
    fn test_empty_range_is_an_error() {
        assert_eq!(
            parse_duration("13:00-13:00"),
            Err(ErrorKind::NegativeDurationRange("13:00-13:00".to_string()))
        );
    }

    #[test]
    fn test_invalid_clock_in_range() {
        assert_eq!(
            parse_duration("25:00-26:00"),
            Err(ErrorKind::UnrecognizedDuration("25:00-26:00".to_string()))
        );
    }

    #[test]
    fn test_unrecognized_tokens() {
        for token in ["done", "1x", "h", "1.5h", "9:00-10:00", "1h 15m", ".a."] {
            assert_eq!(
                parse_duration(token),
                Err(ErrorKind::UnrecognizedDuration(token.to_string())),
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_missing_duration() {
        assert_eq!(parse_duration(""), Err(ErrorKind::MissingDuration));
    }

    #[test]
    fn test_canonical_format_keeps_raw() {
        let spent = parse_duration("...").unwrap();
        assert_eq!(spent.format(), "45m");
        assert_eq!(spent.raw, "...");
        assert_eq!(parse_duration("75m").unwrap().format(), "1h15m");
    }
}
