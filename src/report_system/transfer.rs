use std::fmt;

/// Launch window for a Hohmann transfer between two bodies sharing a parent.
#[derive(Clone, Debug, PartialEq)]
pub struct TransferSummary {
    pub from: String,
    pub to: String,
    pub phase_angle_rad: f64,
}

impl TransferSummary {
    pub fn new(from: impl Into<String>, to: impl Into<String>, phase_angle_rad: f64) -> Self {
        TransferSummary {
            from: from.into(),
            to: to.into(),
            phase_angle_rad,
        }
    }

    pub fn phase_angle_deg(&self) -> f64 {
        self.phase_angle_rad.to_degrees()
    }
}

impl fmt::Display for TransferSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degrees = self.phase_angle_deg();
        writeln!(f, "For a Hohmann transfer from {} to {}:", self.from, self.to)?;
        writeln!(f, "Phase angle needed: {:.2}°", degrees)?;
        writeln!(
            f,
            "{} should be {:.2}° ahead of {} when starting the transfer.",
            self.to, degrees, self.from
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_summary_text() {
        let summary = TransferSummary::new("Mars", "Earth", 0.773_690_1);

        assert_abs_diff_eq!(summary.phase_angle_deg(), 44.33, epsilon = 0.01);
        assert_eq!(
            summary.to_string(),
            "For a Hohmann transfer from Mars to Earth:\n\
             Phase angle needed: 44.33°\n\
             Earth should be 44.33° ahead of Mars when starting the transfer.\n"
        );
    }
}
