/// Attendance mark of a single day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Attendance {
    #[default]
    Empty,
    Present,
    Absent,
    Half,
}

impl Attendance {
    /// Next state of the toggle cycle: Empty → Present → Absent → Half → Empty.
    pub fn next(self) -> Self {
        match self {
            Attendance::Empty => Attendance::Present,
            Attendance::Present => Attendance::Absent,
            Attendance::Absent => Attendance::Half,
            Attendance::Half => Attendance::Empty,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Attendance::Empty => "",
            Attendance::Present => "✔",
            Attendance::Absent => "✖",
            Attendance::Half => "½",
        }
    }
}

/// Target of a whole-row mark. Only these two states can be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkMark {
    Present,
    Absent,
}

impl BulkMark {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "present" | "p" => Some(BulkMark::Present),
            "absent" | "a" => Some(BulkMark::Absent),
            _ => None,
        }
    }

    pub fn state(self) -> Attendance {
        match self {
            BulkMark::Present => Attendance::Present,
            BulkMark::Absent => Attendance::Absent,
        }
    }
}

/// One day of one employee. The rest-day flag is fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceCell {
    state: Attendance,
    rest_day: bool,
}

impl AttendanceCell {
    pub fn new(rest_day: bool) -> Self {
        Self {
            state: Attendance::Empty,
            rest_day,
        }
    }

    pub fn state(&self) -> Attendance {
        self.state
    }

    pub fn is_rest_day(&self) -> bool {
        self.rest_day
    }

    pub fn glyph(&self) -> &'static str {
        self.state.glyph()
    }

    /// Advance the cell one step along the cycle and return the new state.
    pub fn toggle(&mut self) -> Attendance {
        self.state = self.state.next();
        self.state
    }

    pub(crate) fn force(&mut self, state: Attendance) {
        self.state = state;
    }
}
