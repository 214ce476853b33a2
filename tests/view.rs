#[cfg(test)]
mod tests {
    use std::path::Path;
    use ttrack::libs::query::FilterOptions;
    use ttrack::libs::summary::{summarize, Grouping};
    use ttrack::libs::view::View;
    use ttrack::timelog::file::parse_str;

    fn render(text: &str) -> String {
        let dataset = parse_str(text, Path::new("time.txt")).unwrap();
        let groups = summarize(&dataset, &FilterOptions::default(), Grouping::Day);
        let mut out = Vec::new();
        View::summary(&groups, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_summary_table_layout() {
        let table = View::summary_table(&[]);
        assert_eq!(table.len(), 0);
        let mut out = Vec::new();
        table.print(&mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        for title in ["#", "date", "s/e", "wtime", "time", "text", "project", "context"] {
            assert!(output.contains(title), "missing column {}", title);
        }
    }

    #[test]
    fn test_summary_lists_entries_and_totals() {
        let output = render("2024-03-04\n  >09:00\n  x $ 1h15m review +acme @office\n  <17:30\n");
        assert!(output.contains("review +acme @office"));
        assert!(output.contains("+acme"));
        assert!(output.contains("@office"));
        assert!(output.contains("1h15m"));
        assert!(output.contains("> 09:00"));
        assert!(output.contains("< 17:30"));
        assert!(output.contains("8h30m"));
    }

    #[test]
    fn test_summary_rows_per_group() {
        let dataset = parse_str(
            "2024-03-04\n  >09:00\n  1h a\n  2h b\n  <12:00\n2024-03-05 1h c\n",
            Path::new("time.txt"),
        )
        .unwrap();
        let groups = summarize(&dataset, &FilterOptions::default(), Grouping::Day);
        let table = View::summary_table(&groups);
        // 2 entries + 2 marks + totals, then 1 entry + totals
        assert_eq!(table.len(), 8);
    }

    #[test]
    fn test_open_workday_is_flagged() {
        let output = render("2024-03-04\n  >09:00\n  1h still working\n");
        assert!(output.contains("0m (open)"));
    }
}
