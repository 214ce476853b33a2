use super::formatter::{format_duration, DATE_FORMAT, TIME_FORMAT};
use super::summary::{DaySheet, SummaryGroup};
use crate::libs::entry::{MarkKind, TimeEntry, WorkdayMark};
use prettytable::{format, row, Cell, Row, Table};
use std::io::{self, Write};

pub struct View {}

impl View {
    /// Builds the summary table: entry rows, workday rows and one totals row
    /// per group.
    pub fn summary_table(groups: &[SummaryGroup]) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
        table.set_titles(row![
            "#", "x", "$", "date", "s/e", "wtime", "time", "text", "project", "context"
        ]);

        for group in groups {
            for (index, entry) in group.entries.iter().enumerate() {
                table.add_row(Self::entry_row(index + 1, entry));
            }
            for day in &group.workdays {
                for row in Self::workday_rows(day) {
                    table.add_row(row);
                }
            }
            table.add_row(Self::totals_row(group));
        }

        table
    }

    pub fn summary<W: Write>(groups: &[SummaryGroup], out: &mut W) -> io::Result<()> {
        Self::summary_table(groups).print(out)?;
        Ok(())
    }

    fn entry_row(index: usize, entry: &TimeEntry) -> Row {
        row![
            r->index,
            entry.done.map(|flag| flag.glyph().to_string()).unwrap_or_default(),
            entry.billable.map(|flag| flag.glyph().to_string()).unwrap_or_default(),
            entry.date.format(DATE_FORMAT),
            "",
            "",
            r->entry.time.format(),
            entry.text,
            r->entry.project().unwrap_or_default(),
            r->entry.context().unwrap_or_default()
        ]
    }

    fn workday_rows(day: &DaySheet) -> Vec<Row> {
        let last = day.marks.len().saturating_sub(1);
        day.marks
            .iter()
            .enumerate()
            .map(|(index, mark)| {
                let worked = if index == last {
                    let total = format_duration(&day.worked.worked);
                    if day.worked.is_open() {
                        format!("{} (open)", total)
                    } else {
                        total
                    }
                } else {
                    String::new()
                };
                Self::mark_row(mark, worked)
            })
            .collect()
    }

    fn mark_row(mark: &WorkdayMark, worked: String) -> Row {
        let style = match mark.kind {
            MarkKind::Start => "Fg",
            MarkKind::End => "Fr",
        };
        let cells = [
            String::new(),
            String::new(),
            String::new(),
            mark.date.format(DATE_FORMAT).to_string(),
            format!("{} {}", mark.kind.glyph(), mark.time.format(TIME_FORMAT)),
            worked,
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ];
        Row::new(cells.iter().map(|text| Cell::new(text).style_spec(style)).collect())
    }

    fn totals_row(group: &SummaryGroup) -> Row {
        let cells = [
            String::new(),
            String::new(),
            format_duration(&group.billable()),
            group.key.to_string(),
            String::new(),
            format_duration(&group.worked()),
            format_duration(&group.overall()),
            String::new(),
            String::new(),
            String::new(),
        ];
        Row::new(cells.iter().map(|text| Cell::new(text).style_spec("Fbb")).collect())
    }
}
