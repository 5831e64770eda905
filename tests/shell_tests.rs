use chrono::Month;
use predicates::str::contains;
use salarysheet::core::calendar::Period;
use salarysheet::core::cell::{Attendance, BulkMark};
use salarysheet::core::table::regenerate_table;
use salarysheet::export::ExportFormat;
use salarysheet::ui::shell::{Shell, ShellCommand, parse_command};
use std::env;
use std::io::Cursor;

mod common;
use common::{sst, temp_out_dir, write_script};

fn shell_for(period: &str, rows: usize) -> Shell {
    let period = Period::parse(period).unwrap();
    Shell::new(regenerate_table(period, rows), env::temp_dir(), "Salary Sheet", 5).strict(true)
}

#[test]
fn test_parse_commands() {
    assert_eq!(parse_command("   ").unwrap(), None);
    assert_eq!(parse_command("# comment").unwrap(), None);
    assert_eq!(
        parse_command("toggle 2 3 4").unwrap(),
        Some(ShellCommand::Toggle(2, vec![3, 4]))
    );
    assert_eq!(
        parse_command("mark 1 absent").unwrap(),
        Some(ShellCommand::Mark(1, BulkMark::Absent))
    );
    assert_eq!(
        parse_command("name 1 Mario Rossi").unwrap(),
        Some(ShellCommand::Name(1, "Mario Rossi".to_string()))
    );
    assert_eq!(
        parse_command("export pdf force").unwrap(),
        Some(ShellCommand::Export(ExportFormat::Pdf, true))
    );
    assert_eq!(
        parse_command("period 2025-05").unwrap(),
        Some(ShellCommand::Period(Period::new(2025, Month::May).unwrap()))
    );
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(parse_command("dance").is_err());
    assert!(parse_command("toggle 1").is_err());
    assert!(parse_command("toggle x 1").is_err());
    assert!(parse_command("mark 1 half").is_err());
    assert!(parse_command("export xml").is_err());
    assert!(parse_command("period 1999-01").is_err());
}

#[test]
fn test_shell_script_applies_commands() {
    let mut shell = shell_for("2025-04", 2);
    let mut input = Cursor::new(
        "name 1 Alice\n\
         role 1 Welder\n\
         salary 1 3000\n\
         mark 1 present\n\
         toggle 1 1 1 1 2 2\n\
         add\n\
         del 2\n\
         quit\n\
         toggle 1 3\n",
    );

    shell.run(&mut input).unwrap();

    let sheet = shell.sheet();
    assert_eq!(sheet.rows().len(), 2);
    let row = &sheet.rows()[0];
    assert_eq!(row.name, "Alice");
    assert_eq!(row.designation, "Welder");
    assert_eq!(row.full_salary, 3000.0);
    // day 1: present -> absent -> half -> empty
    assert_eq!(row.cell(1).unwrap().state(), Attendance::Empty);
    // day 2: present -> absent -> half
    assert_eq!(row.cell(2).unwrap().state(), Attendance::Half);
    // after quit nothing else runs
    assert_eq!(row.cell(3).unwrap().state(), Attendance::Present);
}

#[test]
fn test_strict_shell_stops_on_error() {
    let mut shell = shell_for("2025-04", 1);
    let mut input = Cursor::new("toggle 9 1\nname 1 Never\n");

    assert!(shell.run(&mut input).is_err());
    assert_eq!(shell.sheet().rows()[0].name, "Employee");
}

#[test]
fn test_lenient_shell_reports_and_continues() {
    let period = Period::parse("2025-04").unwrap();
    let mut shell = Shell::new(regenerate_table(period, 1), env::temp_dir(), "Salary Sheet", 5);
    let mut input = Cursor::new("toggle 9 1\nname 1 Later\n");

    shell.run(&mut input).unwrap();
    assert_eq!(shell.sheet().rows()[0].name, "Later");
}

#[test]
fn test_period_change_regenerates_to_new_day_count() {
    let mut shell = shell_for("2025-04", 3);
    let mut input = Cursor::new("mark 1 present\nperiod 2025-05\n");
    shell.run(&mut input).unwrap();

    let sheet = shell.into_sheet();
    assert_eq!(sheet.rows().len(), 5);
    assert!(sheet.rows().iter().all(|r| r.cells.len() == 31));
    assert!(
        sheet.rows()[0]
            .cells
            .iter()
            .all(|c| c.state() == Attendance::Empty)
    );
}

#[test]
fn test_sheet_command_calc_output() {
    let out = temp_out_dir("sheet_calc");

    sst()
        .args(["--out-dir", &out, "sheet", "--period", "2025-04", "--rows", "1"])
        .write_stdin("name 1 Alice\nsalary 1 3000\nmark 1 present\ncalc\n")
        .assert()
        .success()
        .stdout(contains("April 2025: 30 days"))
        .stdout(contains("Alice"))
        .stdout(contains("2600.00"));
}

#[test]
fn test_sheet_command_reports_bad_row() {
    let out = temp_out_dir("sheet_bad_row");

    sst()
        .args(["--out-dir", &out, "sheet", "--period", "2025-04"])
        .write_stdin("toggle 42 1\n")
        .assert()
        .success()
        .stderr(contains("Row 42 does not exist"));
}

#[test]
fn test_sheet_command_script_failure_exits_non_zero() {
    let out = temp_out_dir("sheet_script_fail");
    let script = write_script("sheet_script_fail", &["toggle 1 40"]);

    sst()
        .args([
            "--out-dir", &out, "sheet", "--period", "2025-04", "--script", &script,
        ])
        .assert()
        .failure()
        .stderr(contains("Day 40 does not exist"));
}

#[test]
fn test_sheet_command_json() {
    let out = temp_out_dir("sheet_json");

    let output = sst()
        .args(["--out-dir", &out, "sheet", "--period", "2025-02", "--rows", "1"])
        .write_stdin("salary 1 2800\ntoggle 1 3\njson\n")
        .output()
        .expect("run sheet");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"period\": \"2025-02\""));
    // 2800 / 28 * 1
    assert!(stdout.contains("\"100.00\""));
}

#[test]
fn test_toggle_with_bad_day_changes_nothing() {
    let mut shell = shell_for("2025-02", 1);
    let mut input = Cursor::new("toggle 1 1 2 29\n");

    assert!(shell.run(&mut input).is_err());
    assert!(
        shell.sheet().rows()[0]
            .cells
            .iter()
            .all(|c| c.state() == Attendance::Empty)
    );
}
