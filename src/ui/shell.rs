//! Line-oriented shell driving a [`SalarySheet`].
//!
//! Every line is one user interaction: it is parsed into a [`ShellCommand`],
//! applied to the sheet, and the result is printed. Rows and days are
//! numbered from 1 as on screen.

use crate::core::calendar::Period;
use crate::core::cell::BulkMark;
use crate::core::table::SalarySheet;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic, SheetSnapshot};
use crate::ui::messages::{error, info, success, warning};
use crate::ui::render::{describe_period, render_sheet};
use crate::utils::money;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

pub const HELP: &str = "\
Commands (rows and days start at 1):
  show                     print the sheet
  calc                     recompute counts and salaries, then print
  json                     recompute and print the sheet as JSON
  period YYYY-MM           switch month, discarding all rows
  resize YYYY-MM           switch month, keeping rows and surviving marks
  add                      append a default row
  del ROW                  delete a row
  toggle ROW DAY [DAY...]  cycle cells: empty > present > absent > half
  mark ROW present|absent  mark every non-rest day of a row
  name ROW TEXT            set the employee name
  role ROW TEXT            set the designation
  salary ROW VALUE         set the full monthly salary
  export xlsx|pdf|doc|all [force]
                           (overwrite prompts read stdin when running --script)
  quit | exit";

#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    Help,
    Show,
    Calc,
    Json,
    Period(Period),
    Resize(Period),
    Add,
    Del(usize),
    Toggle(usize, Vec<u32>),
    Mark(usize, BulkMark),
    Name(usize, String),
    Role(usize, String),
    Salary(usize, String),
    Export(ExportFormat, bool),
    Quit,
}

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> AppResult<Option<ShellCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    let args: Vec<&str> = rest.split_whitespace().collect();
    let invalid = || AppError::InvalidCommand(line.to_string());

    let cmd = match verb.to_lowercase().as_str() {
        "help" | "?" => ShellCommand::Help,
        "show" => ShellCommand::Show,
        "calc" => ShellCommand::Calc,
        "json" => ShellCommand::Json,
        "quit" | "exit" => ShellCommand::Quit,
        "add" => ShellCommand::Add,
        "period" => ShellCommand::Period(Period::parse(args.first().ok_or_else(invalid)?)?),
        "resize" => ShellCommand::Resize(Period::parse(args.first().ok_or_else(invalid)?)?),
        "del" => ShellCommand::Del(parse_index(args.first(), line)?),
        "toggle" => {
            let row = parse_index(args.first(), line)?;
            let days = args[1..]
                .iter()
                .map(|d| d.parse::<u32>().map_err(|_| invalid()))
                .collect::<AppResult<Vec<u32>>>()?;
            if days.is_empty() {
                return Err(invalid());
            }
            ShellCommand::Toggle(row, days)
        }
        "mark" => {
            let row = parse_index(args.first(), line)?;
            let target = args
                .get(1)
                .and_then(|t| BulkMark::from_str_opt(t))
                .ok_or_else(invalid)?;
            ShellCommand::Mark(row, target)
        }
        "name" | "role" | "salary" => {
            let (row_raw, text) = rest.split_once(char::is_whitespace).ok_or_else(invalid)?;
            let row = parse_index(Some(&row_raw), line)?;
            let text = text.trim().to_string();
            match verb.to_lowercase().as_str() {
                "name" => ShellCommand::Name(row, text),
                "role" => ShellCommand::Role(row, text),
                _ => ShellCommand::Salary(row, text),
            }
        }
        "export" => {
            let format = ExportFormat::parse(args.first().ok_or_else(invalid)?)?;
            let force = matches!(args.get(1), Some(&"force") | Some(&"-f"));
            ShellCommand::Export(format, force)
        }
        _ => return Err(invalid()),
    };

    Ok(Some(cmd))
}

fn parse_index(arg: Option<&&str>, line: &str) -> AppResult<usize> {
    arg.and_then(|s| s.parse::<usize>().ok())
        .ok_or_else(|| AppError::InvalidCommand(line.to_string()))
}

/// Outcome of one command.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell {
    sheet: SalarySheet,
    out_dir: PathBuf,
    title: String,
    default_rows: usize,
    /// Abort on the first failing command instead of reporting it.
    strict: bool,
    prompt: bool,
    /// Overwrite confirmations come from stdin instead of the command input.
    confirm_from_stdin: bool,
}

impl Shell {
    pub fn new(sheet: SalarySheet, out_dir: PathBuf, title: &str, default_rows: usize) -> Self {
        Self {
            sheet,
            out_dir,
            title: title.to_string(),
            default_rows,
            strict: false,
            prompt: false,
            confirm_from_stdin: false,
        }
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Used when commands come from a script file, so that an `export`
    /// never takes the next script line as its yes/no answer.
    pub fn confirm_from_stdin(mut self, enabled: bool) -> Self {
        self.confirm_from_stdin = enabled;
        self
    }

    pub fn prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn sheet(&self) -> &SalarySheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut SalarySheet {
        &mut self.sheet
    }

    pub fn into_sheet(self) -> SalarySheet {
        self.sheet
    }

    /// Read and apply commands until end of input or `quit`.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> AppResult<()> {
        let mut line = String::new();

        loop {
            if self.prompt {
                print!("{}> ", self.sheet.period());
                io::stdout().flush().ok();
            }

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let result = parse_command(&line).and_then(|cmd| match cmd {
                Some(cmd) => self.execute(cmd, input),
                None => Ok(Flow::Continue),
            });

            match result {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if self.strict => return Err(e),
                Err(e) => error(e),
            }
        }

        Ok(())
    }

    /// Apply one command. `input` answers overwrite prompts during export.
    pub fn execute<R: BufRead>(&mut self, cmd: ShellCommand, input: &mut R) -> AppResult<Flow> {
        match cmd {
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::Show => print!("{}", render_sheet(&self.sheet)),
            ShellCommand::Calc => {
                self.sheet.recompute();
                print!("{}", render_sheet(&self.sheet));
            }
            ShellCommand::Json => {
                self.sheet.recompute();
                let snapshot = SheetSnapshot::from_sheet(&self.sheet, &self.title);
                let json = serde_json::to_string_pretty(&snapshot)
                    .map_err(|e| AppError::Export(e.to_string()))?;
                println!("{json}");
            }
            ShellCommand::Period(period) => {
                let had_rows = !self.sheet.rows().is_empty();
                self.sheet.regenerate(period, self.default_rows);
                if had_rows {
                    warning("Previous rows discarded (use `resize` to keep them).");
                }
                info(describe_period(&period));
            }
            ShellCommand::Resize(period) => {
                self.sheet.resize(period);
                info(describe_period(&period));
            }
            ShellCommand::Add => {
                let n = self.sheet.add_row();
                success(format!("Row {n} added"));
            }
            ShellCommand::Del(row) => {
                let removed = self.sheet.remove_row(row)?;
                success(format!("Row {row} ({}) deleted", removed.name));
            }
            ShellCommand::Toggle(row, days) => {
                let states = self.sheet.toggle_many(row, &days)?;
                for (day, state) in days.iter().zip(states) {
                    println!("Row {row}, day {day}: {:?} {}", state, state.glyph());
                }
            }
            ShellCommand::Mark(row, target) => {
                self.sheet.bulk_mark(row, target)?;
                success(format!("Row {row}: working days marked {:?}", target));
            }
            ShellCommand::Name(row, text) => self.sheet.set_name(row, &text)?,
            ShellCommand::Role(row, text) => self.sheet.set_designation(row, &text)?,
            ShellCommand::Salary(row, text) => {
                let value = self.sheet.set_salary(row, &text)?;
                if value == 0.0 && text.trim().parse::<f64>().map_or(true, |v| v != 0.0) {
                    warning(format!("Salary '{text}' not understood, using 0"));
                }
                println!("Row {row}: full salary {}", money(value));
            }
            ShellCommand::Export(format, force) if self.confirm_from_stdin => {
                ExportLogic::export(
                    &mut self.sheet,
                    format,
                    &self.out_dir,
                    &self.title,
                    force,
                    &mut io::stdin().lock(),
                )?;
            }
            ShellCommand::Export(format, force) => {
                ExportLogic::export(
                    &mut self.sheet,
                    format,
                    &self.out_dir,
                    &self.title,
                    force,
                    input,
                )?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }
}
