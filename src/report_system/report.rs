use std::fmt;

use colored::Colorize;
use log::warn;

use crate::bodies::celestial_body::Rgb;
use crate::constants::{DEFAULT_ORBIT_ALTITUDE_KM, MISSING_CELL, REPORT_TITLE};
use crate::errors::{CalculatorError, Result};
use crate::physics_system::calculator::BodyMetrics;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOptions {
    pub color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Align {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum CellStyle {
    Name(Rgb),
    Value,
    Reference,
}

struct Cell {
    text: String,
    style: CellStyle,
}

/// Tabular view over already-evaluated bodies. Formatting only: every number
/// shown comes from the `BodyMetrics` it was given.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    title: String,
    orbit_altitude_km: f64,
    rows: Vec<BodyMetrics>,
}

impl Report {
    pub fn new(rows: Vec<BodyMetrics>, orbit_altitude_km: f64) -> Self {
        Report {
            title: REPORT_TITLE.to_string(),
            orbit_altitude_km,
            rows,
        }
    }

    /// Splits a batch of evaluations into a report of the successes and the
    /// list of failures, keeping input order for both.
    pub fn from_results(
        results: Vec<Result<BodyMetrics>>,
        orbit_altitude_km: f64,
    ) -> (Self, Vec<CalculatorError>) {
        let mut rows = Vec::with_capacity(results.len());
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(metrics) => rows.push(metrics),
                Err(err) => failures.push(err),
            }
        }
        (Report::new(rows, orbit_altitude_km), failures)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn rows(&self) -> &[BodyMetrics] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn headers(&self) -> Vec<String> {
        vec![
            "Name".to_string(),
            "M (kg)".to_string(),
            "R (km)".to_string(),
            "SG (m/s²)".to_string(),
            "EV (km/s)".to_string(),
            format!("Orbit (km/s) {}km", Self::format_altitude(self.orbit_altitude_km)),
            "Parent Body".to_string(),
            "Distance (km)".to_string(),
        ]
    }

    fn alignments() -> [Align; 8] {
        [
            Align::Left,
            Align::Right,
            Align::Right,
            Align::Right,
            Align::Right,
            Align::Right,
            Align::Left,
            Align::Right,
        ]
    }

    /// Display text for each row, without any styling.
    pub fn cells(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| Self::row_cells(row).into_iter().map(|cell| cell.text).collect())
            .collect()
    }

    fn row_cells(row: &BodyMetrics) -> Vec<Cell> {
        let value = |text: String| Cell {
            text,
            style: CellStyle::Value,
        };

        vec![
            Cell {
                text: row.name.clone(),
                style: CellStyle::Name(row.color),
            },
            value(Self::scientific_or_raw(row.mass_kg, 2)),
            value(Self::format_fixed(row.radius_km, 1)),
            value(Self::format_fixed(row.surface_gravity_mps2, 2)),
            value(Self::format_fixed(row.escape_velocity_kmps, 2)),
            value(Self::format_fixed(row.orbital_velocity_kmps, 2)),
            Cell {
                text: row.parent.clone().unwrap_or_else(|| MISSING_CELL.to_string()),
                style: CellStyle::Reference,
            },
            value(match (&row.parent, row.distance_from_parent_km) {
                (Some(_), Some(distance)) => Self::thousands_or_raw(distance),
                _ => MISSING_CELL.to_string(),
            }),
        ]
    }

    pub fn format_scientific(value: f64, precision: usize) -> Result<String> {
        if value.is_finite() {
            Ok(format!("{:.precision$e}", value, precision = precision))
        } else {
            Err(CalculatorError::FormatError(format!(
                "cannot write {} in scientific notation",
                value
            )))
        }
    }

    /// Rounds to whole units and groups digits by thousands.
    pub fn format_thousands(value: f64) -> Result<String> {
        if !value.is_finite() {
            return Err(CalculatorError::FormatError(format!(
                "cannot group digits of {}",
                value
            )));
        }

        let digits = format!("{:.0}", value.abs());
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        if value < 0.0 && digits != "0" {
            grouped.insert(0, '-');
        }
        Ok(grouped)
    }

    pub fn format_fixed(value: f64, precision: usize) -> String {
        format!("{:.precision$}", value, precision = precision)
    }

    fn format_altitude(altitude_km: f64) -> String {
        if altitude_km.fract() == 0.0 {
            format!("{:.0}", altitude_km)
        } else {
            format!("{}", altitude_km)
        }
    }

    fn scientific_or_raw(value: f64, precision: usize) -> String {
        Self::format_scientific(value, precision).unwrap_or_else(|err| {
            warn!("{}; rendering raw value", err);
            value.to_string()
        })
    }

    fn thousands_or_raw(value: f64) -> String {
        Self::format_thousands(value).unwrap_or_else(|err| {
            warn!("{}; rendering raw value", err);
            value.to_string()
        })
    }

    fn pad(text: &str, width: usize, align: Align) -> String {
        match align {
            Align::Left => format!("{:<width$}", text, width = width),
            Align::Right => format!("{:>width$}", text, width = width),
        }
    }

    fn paint(text: String, style: CellStyle, options: &RenderOptions) -> String {
        if !options.color {
            return text;
        }
        match style {
            CellStyle::Name((r, g, b)) => text.truecolor(r, g, b).to_string(),
            CellStyle::Value => text.yellow().to_string(),
            CellStyle::Reference => text.cyan().to_string(),
        }
    }

    pub fn render(&self, options: &RenderOptions) -> String {
        let headers = self.headers();
        let alignments = Self::alignments();
        let rows: Vec<Vec<Cell>> = self.rows.iter().map(Self::row_cells).collect();

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.text.chars().count());
            }
        }

        let separator = " | ";
        let table_width =
            widths.iter().sum::<usize>() + separator.len() * widths.len().saturating_sub(1);

        let mut out = String::new();
        let title = format!("{:^width$}", self.title, width = table_width);
        out.push_str(title.trim_end());
        out.push('\n');

        let header_line = headers
            .iter()
            .zip(&widths)
            .zip(alignments)
            .map(|((header, &width), align)| {
                let padded = Self::pad(header, width, align);
                if options.color {
                    padded.bold().to_string()
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(separator);
        out.push_str(&header_line);
        out.push('\n');

        let rule = widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-");
        out.push_str(&rule);
        out.push('\n');

        for row in rows {
            let line = row
                .into_iter()
                .zip(&widths)
                .zip(alignments)
                .map(|((cell, &width), align)| {
                    Self::paint(Self::pad(&cell.text, width, align), cell.style, options)
                })
                .collect::<Vec<_>>()
                .join(separator);
            out.push_str(&line);
            out.push('\n');
        }

        out
    }

    pub fn display(&self, options: &RenderOptions) {
        print!("{}", self.render(options));
    }
}

impl Default for Report {
    fn default() -> Self {
        Report::new(Vec::new(), DEFAULT_ORBIT_ALTITUDE_KM)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(name: &str) -> BodyMetrics {
        BodyMetrics {
            name: name.to_string(),
            mass_kg: 5.972e24,
            radius_km: 6371.0,
            surface_gravity_mps2: 9.8203,
            escape_velocity_kmps: 11.1861,
            orbital_velocity_kmps: 7.7885,
            parent: Some("Sun".to_string()),
            distance_from_parent_km: Some(149.6e6),
            color: (0, 0, 255),
        }
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(Report::format_scientific(5.972e24, 2).unwrap(), "5.97e24");
        assert_eq!(Report::format_scientific(1.989e30, 2).unwrap(), "1.99e30");
        assert!(matches!(
            Report::format_scientific(f64::NAN, 2),
            Err(CalculatorError::FormatError(_))
        ));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(Report::format_thousands(0.0).unwrap(), "0");
        assert_eq!(Report::format_thousands(999.0).unwrap(), "999");
        assert_eq!(Report::format_thousands(9377.0).unwrap(), "9,377");
        assert_eq!(Report::format_thousands(384_400.0).unwrap(), "384,400");
        assert_eq!(Report::format_thousands(1.434e9).unwrap(), "1,434,000,000");
        assert_eq!(Report::format_thousands(-1234.4).unwrap(), "-1,234");
        assert!(Report::format_thousands(f64::INFINITY).is_err());
    }

    #[test]
    fn test_cells() {
        let report = Report::new(vec![metrics("Earth")], 200.0);
        let cells = report.cells();

        assert_eq!(
            cells[0],
            vec!["Earth", "5.97e24", "6371.0", "9.82", "11.19", "7.79", "Sun", "149,600,000"]
        );
    }

    #[test]
    fn test_missing_parent_renders_dash() {
        let mut sun = metrics("Sun");
        sun.parent = None;
        sun.distance_from_parent_km = None;

        let cells = Report::new(vec![sun], 200.0).cells();
        assert_eq!(cells[0][6], "-");
        assert_eq!(cells[0][7], "-");
    }

    #[test]
    fn test_non_finite_values_render_as_is() {
        let mut broken = metrics("Broken");
        broken.mass_kg = f64::NAN;
        broken.surface_gravity_mps2 = f64::INFINITY;
        broken.distance_from_parent_km = Some(f64::NAN);

        let report = Report::new(vec![broken, metrics("Earth")], 200.0);
        let cells = report.cells();

        assert_eq!(cells[0][1], "NaN");
        assert_eq!(cells[0][3], "inf");
        assert_eq!(cells[0][7], "NaN");
        assert_eq!(cells[1][0], "Earth");
    }

    #[test]
    fn test_render_plain_layout() {
        let report = Report::new(vec![metrics("Earth"), metrics("Mars")], 200.0);
        let rendered = report.render(&RenderOptions::default());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].trim(), REPORT_TITLE);
        assert!(lines[1].starts_with("Name "));
        assert!(lines[1].contains("Orbit (km/s) 200km"));
        assert!(lines[2].chars().all(|c| c == '-' || c == '+'));
        assert!(lines[3].starts_with("Earth | 5.97e24 | "));
        assert!(!rendered.contains('\u{1b}'));

        // Every data line is as wide as the header.
        let header_width = lines[1].chars().count();
        assert_eq!(lines[3].chars().count(), header_width);
        assert_eq!(lines[4].chars().count(), header_width);
        assert_eq!(report.to_string(), rendered);
    }

    #[test]
    fn test_from_results_keeps_successes() {
        let results = vec![
            Ok(metrics("Earth")),
            Err(CalculatorError::invalid_input("mass_kg", 0.0).for_body("Ghost")),
            Ok(metrics("Mars")),
        ];

        let (report, failures) = Report::from_results(results, 200.0);

        let names: Vec<&str> = report.rows().iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Earth", "Mars"]);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].to_string().contains("Ghost"));
    }

    #[test]
    fn test_empty_report_has_headers_only() {
        let report = Report::default().with_title("Nothing");
        assert!(report.is_empty());

        let rendered = report.to_string();
        assert_eq!(rendered.lines().count(), 3);
        assert_eq!(rendered.lines().next().map(str::trim), Some("Nothing"));
    }

    #[test]
    fn test_render_colored_uses_ansi_codes() {
        colored::control::set_override(true);
        let rendered = Report::new(vec![metrics("Earth")], 200.0)
            .render(&RenderOptions { color: true });
        colored::control::unset_override();

        assert!(rendered.contains('\u{1b}'));
        assert!(rendered.contains("Earth"));
    }
}
