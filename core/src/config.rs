/// Electricity price avoided for every self-consumed kWh, in euro.
pub const PRICE_PER_KWH: f64 = 0.2858;

pub const CURRENCY_SYMBOL: &str = "€";
