use crate::constants::METERS_PER_KILOMETER;
use crate::errors::{CalculatorError, Result};

pub fn km_to_m(kilometers: f64) -> f64 {
    kilometers * METERS_PER_KILOMETER
}

pub fn m_to_km(meters: f64) -> f64 {
    meters / METERS_PER_KILOMETER
}

/// Rejects zero, negative, NaN and infinite values.
pub fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CalculatorError::invalid_input(field, value))
    }
}

/// Validates a positive kilometer quantity and returns it in meters. Values so
/// large that the meter form overflows are rejected under the kilometer field.
pub fn require_positive_km_as_m(field: &'static str, kilometers: f64) -> Result<f64> {
    let kilometers = require_positive(field, kilometers)?;
    let meters = km_to_m(kilometers);
    if meters.is_finite() {
        Ok(meters)
    } else {
        Err(CalculatorError::invalid_input(field, kilometers))
    }
}

/// Checks that a derived quantity stayed finite and positive.
pub fn require_representable(
    fields: &'static str,
    inputs: impl FnOnce() -> String,
    result: f64,
) -> Result<f64> {
    if result.is_finite() && result > 0.0 {
        Ok(result)
    } else {
        Err(CalculatorError::invalid_input(fields, inputs()))
    }
}

pub fn require_non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CalculatorError::invalid_input(field, value))
    }
}

/// Parses user text into a positive quantity. Unparseable text is reported
/// verbatim so the caller sees exactly what was typed.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<f64> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| CalculatorError::invalid_input(field, format!("'{}'", raw)))?;
    require_positive(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_km_to_m() {
        assert_eq!(km_to_m(6371.0), 6_371_000.0);
        assert_eq!(m_to_km(11_186.0), 11.186);
    }

    #[test]
    fn test_round_trip_conversion() {
        for radius_km in [0.001, 1.0, 11.267, 1737.4, 6371.0, 696_340.0] {
            assert_relative_eq!(m_to_km(km_to_m(radius_km)), radius_km, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("mass_kg", 5.972e24), Ok(5.972e24));
        assert!(require_positive("mass_kg", 0.0).is_err());
        assert!(require_positive("mass_kg", -1.0).is_err());
        assert!(require_positive("mass_kg", f64::NAN).is_err());
        assert!(require_positive("mass_kg", f64::INFINITY).is_err());
    }

    #[test]
    fn test_require_non_negative_accepts_zero() {
        assert_eq!(require_non_negative("altitude_km", 0.0), Ok(0.0));
        assert!(require_non_negative("altitude_km", -0.5).is_err());
    }

    #[test]
    fn test_require_positive_km_as_m() {
        assert_eq!(require_positive_km_as_m("radius_km", 6371.0), Ok(6_371_000.0));
        assert_eq!(
            require_positive_km_as_m("radius_km", 1e306),
            Err(CalculatorError::InvalidInput {
                field: "radius_km",
                value: 1e306_f64.to_string(),
            })
        );
        assert!(require_positive_km_as_m("radius_km", 0.0).is_err());
    }

    #[test]
    fn test_require_representable() {
        assert_eq!(require_representable("g", || "x".to_string(), 9.8), Ok(9.8));
        assert!(require_representable("g", || "x".to_string(), 0.0).is_err());
        assert!(require_representable("g", || "x".to_string(), f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_positive() {
        assert_eq!(parse_positive("radius_km", " 1737.4 "), Ok(1737.4));
        assert_eq!(parse_positive("mass_kg", "7.348e22"), Ok(7.348e22));

        let err = parse_positive("mass_kg", "heavy").unwrap_err();
        assert_eq!(
            err,
            CalculatorError::InvalidInput {
                field: "mass_kg",
                value: "'heavy'".to_string(),
            }
        );
        assert!(parse_positive("radius_km", "-12").is_err());
        assert!(parse_positive("radius_km", "inf").is_err());
    }
}
