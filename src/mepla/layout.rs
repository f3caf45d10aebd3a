use crate::document::{TabAlignment, TabStop};

// character width used to turn a 1-based column offset into a tab position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnLayout {
    Dat, // 1.75 mm
    Rep, // 1.8 mm
}

impl ColumnLayout {
    pub fn millimetres_per_column(&self) -> f64 {
        match self {
            Self::Dat => 1.75,
            Self::Rep => 1.8,
        }
    }

    pub fn tab_stop(&self, column: usize) -> TabStop {
        TabStop {
            position_mm: column as f64 * self.millimetres_per_column(),
            alignment: TabAlignment::Left,
        }
    }

    pub fn tab_stops(&self, columns: &[usize]) -> Vec<TabStop> {
        columns.iter().map(|&c| self.tab_stop(c)).collect()
    }
}
