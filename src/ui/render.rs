//! Terminal rendering of the sheet. Pure functions of state.

use crate::core::calendar::{Period, REST_DAY};
use crate::core::table::SalarySheet;
use crate::utils::colors::{GREY, RED, color_for_attendance, color_for_rest_day};
use crate::utils::money;
use crate::utils::table::{Cell, Column, Table};

/// One-line description of a period: days and rest days.
pub fn describe_period(period: &Period) -> String {
    let rest: Vec<String> = period.rest_days().iter().map(|d| d.to_string()).collect();
    format!(
        "{}: {} days, {} rest days ({}): {}",
        period.label(),
        period.days(),
        rest.len(),
        REST_DAY,
        rest.join(", ")
    )
}

/// Day header as printed by `calendar`.
pub fn render_calendar(period: &Period) -> String {
    let header = crate::core::table::build_header(period);

    let columns = header
        .iter()
        .map(|h| {
            Column::new(h.day.to_string())
                .right()
                .colored(color_for_rest_day(h.is_rest_day))
        })
        .collect();
    let mut table = Table::new(columns);

    table.add_row(
        header
            .iter()
            .map(|h| Cell {
                text: period
                    .weekday_of(h.day)
                    .map(|wd| wd.to_string()[..2].to_string())
                    .unwrap_or_default(),
                color: None,
            })
            .collect(),
    );

    format!("{}\n{}", describe_period(period), table.render())
}

/// Full sheet: identity, salary, derived counts and one column per day.
pub fn render_sheet(sheet: &SalarySheet) -> String {
    let mut columns = vec![
        Column::new("#").right(),
        Column::new("Name"),
        Column::new("Designation"),
        Column::new("Salary").right(),
        Column::new("P").right(),
        Column::new("A").right(),
        Column::new("H").right(),
        Column::new("Adjusted").right(),
    ];
    columns.extend(
        sheet.header().iter().map(|h| {
            Column::new(h.day.to_string())
                .right()
                .colored(color_for_rest_day(h.is_rest_day))
        }),
    );

    let mut table = Table::new(columns);

    for (i, row) in sheet.rows().iter().enumerate() {
        let mut cells: Vec<Cell> = vec![
            (i + 1).to_string().into(),
            row.name.clone().into(),
            row.designation.clone().into(),
            money(row.full_salary).into(),
            row.summary.present.to_string().into(),
            row.summary.absent.to_string().into(),
            row.summary.half.to_string().into(),
            money(row.summary.adjusted_salary).into(),
        ];

        cells.extend(row.cells.iter().map(|c| {
            let glyph = c.glyph();
            match (glyph.is_empty(), c.is_rest_day()) {
                (true, true) => Cell {
                    text: "·".to_string(),
                    color: Some(RED),
                },
                (true, false) => Cell {
                    text: "·".to_string(),
                    color: Some(GREY),
                },
                (false, _) => Cell {
                    text: glyph.to_string(),
                    color: Some(color_for_attendance(c.state())),
                },
            }
        }));

        table.add_row(cells);
    }

    format!("{}\n{}", describe_period(&sheet.period()), table.render())
}
