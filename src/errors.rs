use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CalculatorError {
    #[error("Invalid input: {field} must be a positive finite number, got {value}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Body '{body}': {source}")]
    InvalidBody {
        body: String,
        #[source]
        source: Box<CalculatorError>,
    },

    #[error("Unknown body: {0}")]
    UnknownBody(String),

    #[error("{0} does not orbit another body")]
    NotOrbiting(String),

    #[error("{from} orbits {from_parent} but {to} orbits {to_parent}; a transfer needs a shared parent")]
    ParentMismatch {
        from: String,
        from_parent: String,
        to: String,
        to_parent: String,
    },

    #[error("Format error: {0}")]
    FormatError(String),
}

impl CalculatorError {
    pub fn invalid_input(field: &'static str, value: impl ToString) -> Self {
        CalculatorError::InvalidInput {
            field,
            value: value.to_string(),
        }
    }

    /// Attaches the body name to a validation failure.
    pub fn for_body(self, body: &str) -> Self {
        match self {
            CalculatorError::InvalidBody { .. } => self,
            other => CalculatorError::InvalidBody {
                body: body.to_string(),
                source: Box::new(other),
            },
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        match self {
            CalculatorError::InvalidInput { .. } => true,
            CalculatorError::InvalidBody { source, .. } => source.is_invalid_input(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_body_message_names_body_and_field() {
        let err = CalculatorError::invalid_input("radius_km", -3.0).for_body("Vulcan");

        assert_eq!(
            err.to_string(),
            "Body 'Vulcan': Invalid input: radius_km must be a positive finite number, got -3"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_for_body_does_not_double_wrap() {
        let err = CalculatorError::invalid_input("mass_kg", 0.0)
            .for_body("Inner")
            .for_body("Outer");

        match err {
            CalculatorError::InvalidBody { body, .. } => assert_eq!(body, "Inner"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_format_error_is_not_invalid_input() {
        assert!(!CalculatorError::FormatError("NaN".to_string()).is_invalid_input());
        assert!(!CalculatorError::UnknownBody("Pluto".to_string()).is_invalid_input());
    }
}
