/// Width breakpoints for arranging the calculator panels.
///
/// Render code asks the breakpoint what to show rather than comparing widths.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    /// < 60 cols: keypad and history stacked
    Compact,
    /// 60-99 cols: history beside the keypad
    Normal,
    /// 100-139 cols: history shows timestamps
    Wide,
    /// 140+ cols: logs get their own column
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    pub fn at_least(self, min: Breakpoint) -> bool {
        self >= min
    }

    /// History panel sits to the right of the calculator
    pub fn history_beside(self) -> bool {
        self.at_least(Breakpoint::Normal)
    }

    /// History lines carry their wall-clock time
    pub fn history_timestamps(self) -> bool {
        self.at_least(Breakpoint::Wide)
    }

    /// Logs panel gets a column instead of a strip at the bottom
    pub fn logs_column(self) -> bool {
        self == Breakpoint::UltraWide
    }
}
