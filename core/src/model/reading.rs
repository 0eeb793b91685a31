use chrono::Month;
use serde::{Deserialize, Serialize};

/// Energy readings for one calendar month of the tracked year.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MonthlyReading {
    pub month: Month,
    pub energy_produced_kwh: f64,
    pub energy_fed_into_grid_kwh: f64,
}

impl MonthlyReading {
    pub fn new(month: Month, energy_produced_kwh: f64, energy_fed_into_grid_kwh: f64) -> Self {
        Self {
            month,
            energy_produced_kwh,
            energy_fed_into_grid_kwh,
        }
    }

    /// 1 for January through 12 for December.
    pub fn month_index(&self) -> u32 {
        self.month.number_from_month()
    }

    pub fn month_label(&self) -> &'static str {
        month_label(self.month)
    }
}

/// Three-letter abbreviation ("Jan", "Feb", ...).
pub fn month_label(month: Month) -> &'static str {
    &month.name()[..3]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_index_and_label() {
        let reading = MonthlyReading::new(Month::January, 30.86, 6.06);
        assert_eq!(reading.month_index(), 1);
        assert_eq!(reading.month_label(), "Jan");

        let reading = MonthlyReading::new(Month::September, 103.62, 32.57);
        assert_eq!(reading.month_index(), 9);
        assert_eq!(reading.month_label(), "Sep");
    }
}
