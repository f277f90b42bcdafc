pub mod calculator;
pub mod units;
