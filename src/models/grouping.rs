use clap::ValueEnum;
use serde::Serialize;

/// Which grouping(s) the `stats` command prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum Grouping {
    AngelType,
    ShiftType,
    All,
}

impl Grouping {
    pub fn includes_angel_types(&self) -> bool {
        matches!(self, Grouping::AngelType | Grouping::All)
    }

    pub fn includes_shift_types(&self) -> bool {
        matches!(self, Grouping::ShiftType | Grouping::All)
    }
}
