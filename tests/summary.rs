#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use std::path::Path;
    use ttrack::libs::entry::{LogDataset, MarkKind, SourceLocation, WorkdayMark};
    use ttrack::libs::query::FilterOptions;
    use ttrack::libs::summary::{
        billable_time, saturating_sum, summarize, total_time, worked_time, GroupKey, Grouping,
    };
    use ttrack::timelog::file::parse_str;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn mark(time: (u32, u32), kind: MarkKind) -> WorkdayMark {
        WorkdayMark {
            location: SourceLocation::default(),
            date: date(3, 4),
            time: NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap(),
            kind,
        }
    }

    fn dataset() -> LogDataset {
        let text = "\
2024-03-04
  >09:00
  $ 1h15m review +acme
  - 30m internal sync
  <12:00
  >13:00
  € 2h consulting +globex
  <17:30
2024-03-06 .. standup
$ 2024-03-11 1h next week +acme
";
        parse_str(text, Path::new("time.txt")).unwrap()
    }

    #[test]
    fn test_worked_time_pairs_start_and_end() {
        let marks = [
            mark((9, 0), MarkKind::Start),
            mark((12, 0), MarkKind::End),
            mark((13, 0), MarkKind::Start),
            mark((17, 30), MarkKind::End),
        ];
        let worked = worked_time(&marks);
        assert_eq!(worked.worked, Duration::minutes(7 * 60 + 30));
        assert_eq!(worked.open_since, None);
    }

    #[test]
    fn test_worked_time_ignores_stray_end() {
        let marks = [
            mark((8, 0), MarkKind::End),
            mark((9, 0), MarkKind::Start),
            mark((10, 0), MarkKind::End),
        ];
        assert_eq!(worked_time(&marks).worked, Duration::hours(1));
    }

    #[test]
    fn test_worked_time_repeated_start_moves_span() {
        let marks = [
            mark((9, 0), MarkKind::Start),
            mark((10, 0), MarkKind::Start),
            mark((11, 0), MarkKind::End),
        ];
        assert_eq!(worked_time(&marks).worked, Duration::hours(1));
    }

    #[test]
    fn test_worked_time_open_span() {
        let marks = [
            mark((9, 0), MarkKind::Start),
            mark((10, 0), MarkKind::End),
            mark((14, 0), MarkKind::Start),
        ];
        let worked = worked_time(&marks);
        assert_eq!(worked.worked, Duration::hours(1));
        assert!(worked.is_open());
        assert_eq!(worked.open_since, NaiveTime::from_hms_opt(14, 0, 0));
    }

    #[test]
    fn test_worked_time_backwards_span_adds_nothing() {
        let marks = [mark((17, 0), MarkKind::Start), mark((9, 0), MarkKind::End)];
        assert_eq!(worked_time(&marks).worked, Duration::zero());
    }

    #[test]
    fn test_totals() {
        let dataset = dataset();
        assert_eq!(total_time(dataset.entries()), Duration::minutes(75 + 30 + 120 + 30 + 60));
        assert_eq!(billable_time(dataset.entries()), Duration::minutes(75 + 120 + 60));
    }

    #[test]
    fn test_group_by_day() {
        let dataset = dataset();
        let groups = summarize(&dataset, &FilterOptions::default(), Grouping::Day);
        let keys: Vec<String> = groups.iter().map(|g| g.key.to_string()).collect();
        assert_eq!(keys, vec!["2024-03-04", "2024-03-06", "2024-03-11"]);

        let first = &groups[0];
        assert_eq!(first.entries.len(), 3);
        assert_eq!(first.entries[0].text, "review +acme");
        assert_eq!(first.overall(), Duration::minutes(225));
        assert_eq!(first.billable(), Duration::minutes(195));
        assert_eq!(first.worked(), Duration::minutes(450));
        assert!(!first.is_open());
        assert_eq!(first.workdays.len(), 1);

        assert_eq!(groups[1].billable(), Duration::zero());
        assert_eq!(groups[1].worked(), Duration::zero());
    }

    #[test]
    fn test_group_by_iso_week() {
        let dataset = dataset();
        let groups = summarize(&dataset, &FilterOptions::default(), Grouping::Week);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, GroupKey::Week { year: 2024, week: 10 });
        assert_eq!(groups[0].key.to_string(), "2024-W10");
        assert_eq!(groups[0].entries.len(), 4);
        assert_eq!(groups[0].overall(), Duration::minutes(255));
        assert_eq!(groups[1].key, GroupKey::Week { year: 2024, week: 11 });
    }

    #[test]
    fn test_iso_week_across_new_year() {
        let key = Grouping::Week.key(NaiveDate::from_ymd_opt(2024, 12, 30).unwrap());
        assert_eq!(key, GroupKey::Week { year: 2025, week: 1 });
        assert_eq!(Grouping::Day.key(date(3, 4)), GroupKey::Day(date(3, 4)));
    }

    #[test]
    fn test_filters_apply_to_entries_and_range_to_workdays() {
        let dataset = dataset();
        let options = FilterOptions {
            date_range: Some((date(3, 4), date(3, 6))),
            project: Some("+acme".to_string()),
            ..Default::default()
        };
        let groups = summarize(&dataset, &options, Grouping::Day);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entries.len(), 1);
        assert_eq!(groups[0].worked(), Duration::minutes(450));
    }

    #[test]
    fn test_empty_dataset_has_no_groups() {
        let dataset = LogDataset::default();
        let groups = summarize(&dataset, &FilterOptions::default(), Grouping::Day);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_huge_totals_saturate() {
        let text = "2024-03-04 2000000000000h a\n$ 2024-03-04 2000000000000h b\n";
        let dataset = parse_str(text, Path::new("time.txt")).unwrap();
        let groups = summarize(&dataset, &FilterOptions::default(), Grouping::Day);
        assert_eq!(groups[0].overall(), Duration::MAX);
        assert_eq!(groups[0].billable(), Duration::hours(2_000_000_000_000));
        assert_eq!(total_time(dataset.entries()), Duration::MAX);
    }

    #[test]
    fn test_saturating_sum() {
        assert_eq!(saturating_sum([]), Duration::zero());
        let sum = saturating_sum([Duration::hours(1), Duration::minutes(30)]);
        assert_eq!(sum, Duration::minutes(90));
        assert_eq!(saturating_sum([Duration::MAX, Duration::minutes(1)]), Duration::MAX);
    }
}
