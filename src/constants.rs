// Physical Constants
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11; // m³/(kg·s²)

// Unit Conversions
pub const METERS_PER_KILOMETER: f64 = 1_000.0;

// Report Defaults
pub const DEFAULT_ORBIT_ALTITUDE_KM: f64 = 200.0; // low orbit reference altitude
pub const REPORT_TITLE: &str = "Celestial Bodies Information";
pub const MISSING_CELL: &str = "-";
