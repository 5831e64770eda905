use chrono::Month;
use salarysheet::core::calendar::Period;
use salarysheet::core::cell::{Attendance, AttendanceCell, BulkMark};
use salarysheet::core::salary::{compute_row, parse_salary};
use salarysheet::core::table::{bulk_mark, build_header, build_row, regenerate_table};
use salarysheet::errors::AppError;

fn april_2025() -> Period {
    Period::new(2025, Month::April).unwrap()
}

#[test]
fn test_toggle_cycle_order_and_glyphs() {
    let mut cell = AttendanceCell::new(false);
    assert_eq!(cell.state(), Attendance::Empty);
    assert_eq!(cell.glyph(), "");

    assert_eq!(cell.toggle(), Attendance::Present);
    assert_eq!(cell.glyph(), "✔");
    assert_eq!(cell.toggle(), Attendance::Absent);
    assert_eq!(cell.glyph(), "✖");
    assert_eq!(cell.toggle(), Attendance::Half);
    assert_eq!(cell.glyph(), "½");
    assert_eq!(cell.toggle(), Attendance::Empty);
}

#[test]
fn test_four_toggles_return_to_start_and_keep_rest_flag() {
    for rest in [false, true] {
        let mut cell = AttendanceCell::new(rest);
        for _ in 0..4 {
            let start = cell.state();
            for _ in 0..4 {
                cell.toggle();
            }
            assert_eq!(cell.state(), start);
            assert_eq!(cell.is_rest_day(), rest);
            cell.toggle();
        }
    }
}

#[test]
fn test_header_and_new_row() {
    let period = april_2025();

    let header = build_header(&period);
    assert_eq!(header.len(), 30);
    assert!(header.windows(2).all(|w| w[0].day < w[1].day));
    let rest: Vec<u32> = header.iter().filter(|h| h.is_rest_day).map(|h| h.day).collect();
    assert_eq!(rest, vec![6, 13, 20, 27]);

    let row = build_row(&period);
    assert_eq!(row.name, "Employee");
    assert_eq!(row.designation, "Designation");
    assert_eq!(row.cells.len(), 30);
    assert!(row.cells.iter().all(|c| c.state() == Attendance::Empty));
    assert!(row.cell(6).unwrap().is_rest_day());
    assert!(!row.cell(7).unwrap().is_rest_day());

    let s = compute_row(&row);
    assert_eq!((s.present, s.absent, s.half), (0, 0, 0));
    assert_eq!(s.adjusted_salary, 0.0);
}

#[test]
fn test_bulk_mark_skips_rest_days() {
    let period = april_2025();

    for target in [BulkMark::Present, BulkMark::Absent] {
        let mut row = build_row(&period);
        // a rest day marked by hand must survive the bulk mark
        row.cells[5].toggle();
        row.cells[5].toggle();
        row.cells[5].toggle();
        assert_eq!(row.cells[5].state(), Attendance::Half);

        bulk_mark(&mut row, target);

        for cell in &row.cells {
            if cell.is_rest_day() {
                continue;
            }
            assert_eq!(cell.state(), target.state());
        }
        assert_eq!(row.cells[5].state(), Attendance::Half);
        assert_eq!(row.cells[12].state(), Attendance::Empty);
    }
}

#[test]
fn test_salary_example() {
    // 30 days: 25 present, 2 half, 3 absent
    let mut sheet = regenerate_table(april_2025(), 1);
    sheet.set_salary(1, "3000").unwrap();
    for day in 1..=25 {
        sheet.toggle(1, day).unwrap();
    }
    for day in 26..=27 {
        for _ in 0..3 {
            sheet.toggle(1, day).unwrap();
        }
    }
    for day in 28..=30 {
        sheet.toggle(1, day).unwrap();
        sheet.toggle(1, day).unwrap();
    }

    sheet.recompute();
    let s = sheet.rows()[0].summary;
    assert_eq!((s.present, s.absent, s.half), (25, 3, 2));
    assert_eq!(s.adjusted_salary, 2600.0);
}

#[test]
fn test_rest_days_count_in_divisor_and_tally() {
    let mut sheet = regenerate_table(april_2025(), 1);
    sheet.set_salary(1, "3100").unwrap();
    sheet.bulk_mark(1, BulkMark::Present).unwrap();
    sheet.recompute();

    // 26 working days over a 30 day divisor
    let s = sheet.rows()[0].summary;
    assert_eq!(s.present, 26);
    assert_eq!(s.adjusted_salary, 2686.67);

    // a rest day toggled by hand is counted
    sheet.toggle(1, 6).unwrap();
    sheet.recompute();
    assert_eq!(sheet.rows()[0].summary.present, 27);
}

#[test]
fn test_compute_row_is_idempotent() {
    let mut sheet = regenerate_table(april_2025(), 2);
    sheet.set_salary(1, "1234.5").unwrap();
    sheet.toggle(1, 3).unwrap();
    sheet.toggle(1, 4).unwrap();
    sheet.toggle(1, 4).unwrap();

    let first = compute_row(&sheet.rows()[0]);
    let second = compute_row(&sheet.rows()[0]);
    assert_eq!(first, second);

    sheet.recompute();
    let stored = sheet.rows()[0].summary;
    sheet.recompute();
    assert_eq!(sheet.rows()[0].summary, stored);
    assert_eq!(stored, first);
}

#[test]
fn test_zero_cells_do_not_divide() {
    let mut row = build_row(&april_2025());
    row.full_salary = 1000.0;
    row.cells.clear();
    assert_eq!(compute_row(&row).adjusted_salary, 0.0);
}

#[test]
fn test_salary_parsing_falls_back_to_zero() {
    assert_eq!(parse_salary("2500"), 2500.0);
    assert_eq!(parse_salary(" 99.5 "), 99.5);
    assert_eq!(parse_salary(""), 0.0);
    assert_eq!(parse_salary("abc"), 0.0);
    assert_eq!(parse_salary("NaN"), 0.0);
    assert_eq!(parse_salary("-10"), 0.0);
}

#[test]
fn test_regenerate_discards_rows() {
    let mut sheet = regenerate_table(april_2025(), 5);
    assert!(sheet.rows().iter().all(|r| r.cells.len() == 30));

    sheet.set_name(1, "Alice").unwrap();
    sheet.bulk_mark(1, BulkMark::Present).unwrap();
    sheet.add_row();
    assert_eq!(sheet.rows().len(), 6);

    sheet.regenerate(Period::new(2025, Month::May).unwrap(), 5);

    assert_eq!(sheet.rows().len(), 5);
    assert_eq!(sheet.header().len(), 31);
    for row in sheet.rows() {
        assert_eq!(row.cells.len(), 31);
        assert_eq!(row.name, "Employee");
        assert!(row.cells.iter().all(|c| c.state() == Attendance::Empty));
    }
}

#[test]
fn test_resize_keeps_rows_and_surviving_marks() {
    let mut sheet = regenerate_table(Period::new(2025, Month::January).unwrap(), 2);
    sheet.set_name(2, "Bob").unwrap();
    sheet.set_salary(2, "3100").unwrap();
    sheet.toggle(2, 2).unwrap();
    sheet.toggle(2, 31).unwrap();

    sheet.resize(Period::new(2025, Month::February).unwrap());

    let row = &sheet.rows()[1];
    assert_eq!(sheet.rows().len(), 2);
    assert_eq!(row.name, "Bob");
    assert_eq!(row.full_salary, 3100.0);
    assert_eq!(row.cells.len(), 28);
    assert_eq!(row.cell(2).unwrap().state(), Attendance::Present);
    // rest flags follow the new month: 2 Feb 2025 is a Sunday
    assert!(row.cell(2).unwrap().is_rest_day());
    assert!(!row.cell(5).unwrap().is_rest_day());
}

#[test]
fn test_remove_row_leaves_others_untouched() {
    let mut sheet = regenerate_table(april_2025(), 3);
    sheet.set_name(1, "A").unwrap();
    sheet.set_name(2, "B").unwrap();
    sheet.set_name(3, "C").unwrap();
    let header = sheet.header().to_vec();

    let removed = sheet.remove_row(2).unwrap();
    assert_eq!(removed.name, "B");

    let names: Vec<&str> = sheet.rows().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "C"]);
    assert_eq!(sheet.header(), header.as_slice());
}

#[test]
fn test_out_of_range_indices() {
    let mut sheet = regenerate_table(april_2025(), 2);

    assert!(matches!(
        sheet.toggle(3, 1),
        Err(AppError::RowOutOfRange { index: 3, rows: 2 })
    ));
    assert!(matches!(sheet.remove_row(0), Err(AppError::RowOutOfRange { .. })));
    assert!(matches!(
        sheet.toggle(1, 31),
        Err(AppError::DayOutOfRange { day: 31, days: 30 })
    ));
    assert!(matches!(sheet.toggle(1, 0), Err(AppError::DayOutOfRange { .. })));
}

#[test]
fn test_toggle_many_checks_every_day_first() {
    let mut sheet = regenerate_table(april_2025(), 1);

    assert!(matches!(
        sheet.toggle_many(1, &[1, 2, 31]),
        Err(AppError::DayOutOfRange { day: 31, days: 30 })
    ));
    assert!(sheet.rows()[0].cells.iter().all(|c| c.state() == Attendance::Empty));

    let states = sheet.toggle_many(1, &[1, 1, 2]).unwrap();
    assert_eq!(
        states,
        vec![Attendance::Present, Attendance::Absent, Attendance::Present]
    );
}
