use crate::model::reading::MonthlyReading;
use crate::repository::traits::ReadingRepository;
use anyhow::Result;
use chrono::Month;

// (month, produced kWh, fed into grid kWh), read off the inverter app at the end of each month.
const TRACKED_YEAR: [(Month, f64, f64); 12] = [
    (Month::January, 30.86, 6.06),
    (Month::February, 30.02, 4.49),
    (Month::March, 60.77, 19.38),
    (Month::April, 71.76, 20.79),
    (Month::May, 116.68, 41.14),
    (Month::June, 124.787, 37.71),
    (Month::July, 108.35, 32.43),
    (Month::August, 91.74, 21.00),
    (Month::September, 103.62, 32.57),
    (Month::October, 52.67, 16.99),
    (Month::November, 24.13, 3.61),
    (Month::December, 13.0, 2.31),
];

/// Serves the hardcoded readings of the tracked year.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedReadingRepository;

impl FixedReadingRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ReadingRepository for FixedReadingRepository {
    fn list(&self) -> Result<Vec<MonthlyReading>> {
        Ok(TRACKED_YEAR
            .iter()
            .map(|&(month, produced, fed_in)| MonthlyReading::new(month, produced, fed_in))
            .collect())
    }
}
