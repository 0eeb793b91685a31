use crate::model::reading::MonthlyReading;
use anyhow::Result;

pub trait ReadingRepository {
    /// Readings in calendar order.
    fn list(&self) -> Result<Vec<MonthlyReading>>;
}
