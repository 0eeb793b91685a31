use serde::{Deserialize, Serialize};

/// Rounds `value` to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Decimal places used when statistics leave the core for display.
///
/// Derived values are never stored rounded; a `Rounding` is only applied
/// while building a [`crate::DashboardView`].
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Rounding {
    pub kwh_places: u32,
    pub pct_places: u32,
    pub currency_places: u32,
}

impl Default for Rounding {
    fn default() -> Self {
        Self {
            kwh_places: 1,
            pct_places: 2,
            currency_places: 2,
        }
    }
}

impl Rounding {
    pub fn kwh(&self, value: f64) -> f64 {
        round_to(value, self.kwh_places)
    }

    pub fn pct(&self, value: f64) -> f64 {
        round_to(value, self.pct_places)
    }

    pub fn currency(&self, value: f64) -> f64 {
        round_to(value, self.currency_places)
    }

    pub fn kwh_label(&self, value: f64) -> String {
        format!("{:.*} kWh", self.kwh_places as usize, value)
    }

    pub fn pct_label(&self, value: f64) -> String {
        format!("{:.*}%", self.pct_places as usize, value)
    }

    pub fn currency_label(&self, value: f64, symbol: &str) -> String {
        format!("{:.*} {}", self.currency_places as usize, value, symbol)
    }
}
