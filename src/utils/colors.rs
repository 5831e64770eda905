/// ANSI color helper utilities for terminal output.
use crate::core::cell::Attendance;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Rest-day columns are shown in red, like the sheet header.
pub fn color_for_rest_day(is_rest_day: bool) -> &'static str {
    if is_rest_day { RED } else { RESET }
}

pub fn color_for_attendance(state: Attendance) -> &'static str {
    match state {
        Attendance::Present => GREEN,
        Attendance::Absent => RED,
        Attendance::Half => YELLOW,
        Attendance::Empty => GREY,
    }
}

/// Wrap `value` in `color` unless it is the reset color.
pub fn paint(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
