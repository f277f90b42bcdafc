use std::f64::consts::PI;

use log::debug;

use crate::bodies::celestial_body::{CelestialBody, Rgb};
use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::errors::{CalculatorError, Result};
use crate::physics_system::units::{
    m_to_km, require_non_negative, require_positive, require_positive_km_as_m,
    require_representable,
};

const MASS_AND_RADIUS: &str = "mass_kg/radius_km";

fn describe(mass_kg: f64, radius_km: f64) -> String {
    format!("{} kg with {} km radius", mass_kg, radius_km)
}

/// Derived quantities for one body, ready for display or programmatic use.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyMetrics {
    pub name: String,
    pub mass_kg: f64,
    pub radius_km: f64,
    pub surface_gravity_mps2: f64,
    pub escape_velocity_kmps: f64,
    pub orbital_velocity_kmps: f64,
    pub parent: Option<String>,
    pub distance_from_parent_km: Option<f64>,
    pub color: Rgb,
}

/// Closed-form gravity formulas with an injected gravitational constant.
/// Inputs are taken in kilometers and converted to meters internally.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsCalculator {
    gravitational_constant: f64,
}

impl Default for PhysicsCalculator {
    fn default() -> Self {
        PhysicsCalculator {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
        }
    }
}

impl PhysicsCalculator {
    pub fn new(gravitational_constant: f64) -> Result<Self> {
        let gravitational_constant =
            require_positive("gravitational_constant", gravitational_constant)?;
        Ok(PhysicsCalculator {
            gravitational_constant,
        })
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    /// g = G·M / r², in m/s².
    pub fn surface_gravity(&self, mass_kg: f64, radius_km: f64) -> Result<f64> {
        let mass_kg = require_positive("mass_kg", mass_kg)?;
        let radius_m = require_positive_km_as_m("radius_km", radius_km)?;
        let gravity = self.gravitational_constant * mass_kg / radius_m.powi(2);
        require_representable(MASS_AND_RADIUS, || describe(mass_kg, radius_km), gravity)
    }

    /// v = √(2·G·M / r), in km/s.
    pub fn escape_velocity(&self, mass_kg: f64, radius_km: f64) -> Result<f64> {
        let mass_kg = require_positive("mass_kg", mass_kg)?;
        let radius_m = require_positive_km_as_m("radius_km", radius_km)?;
        let velocity_mps = (2.0 * self.gravitational_constant * mass_kg / radius_m).sqrt();
        require_representable(
            MASS_AND_RADIUS,
            || describe(mass_kg, radius_km),
            m_to_km(velocity_mps),
        )
    }

    /// Gravitational acceleration at a distance from the body's center, in m/s².
    pub fn gravity_at_distance(&self, mass_kg: f64, distance_km: f64) -> Result<f64> {
        let mass_kg = require_positive("mass_kg", mass_kg)?;
        let distance_m = require_positive_km_as_m("distance_km", distance_km)?;
        let gravity = self.gravitational_constant * mass_kg / distance_m.powi(2);
        require_representable(
            "mass_kg/distance_km",
            || format!("{} kg at {} km", mass_kg, distance_km),
            gravity,
        )
    }

    /// Circular orbit speed at `altitude_km` above the surface, in km/s.
    pub fn orbital_velocity(&self, mass_kg: f64, radius_km: f64, altitude_km: f64) -> Result<f64> {
        let mass_kg = require_positive("mass_kg", mass_kg)?;
        let radius_km = require_positive("radius_km", radius_km)?;
        let altitude_km = require_non_negative("altitude_km", altitude_km)?;
        let orbit_radius_m = require_positive_km_as_m("radius_km", radius_km + altitude_km)?;
        let velocity_mps = (self.gravitational_constant * mass_kg / orbit_radius_m).sqrt();
        require_representable(
            MASS_AND_RADIUS,
            || describe(mass_kg, radius_km),
            m_to_km(velocity_mps),
        )
    }

    /// Phase angle in radians that the outer body must lead the inner one by
    /// when a Hohmann transfer starts. Both bodies must orbit the same parent;
    /// the parent's mass cancels out, so only the two orbit radii matter.
    /// Order does not matter: the smaller orbit is always taken as the start.
    pub fn hohmann_phase_angle(&self, from: &CelestialBody, to: &CelestialBody) -> Result<f64> {
        let from_orbit = from
            .orbit()
            .ok_or_else(|| CalculatorError::NotOrbiting(from.name().to_string()))?;
        let to_orbit = to
            .orbit()
            .ok_or_else(|| CalculatorError::NotOrbiting(to.name().to_string()))?;

        if from_orbit.parent != to_orbit.parent {
            return Err(CalculatorError::ParentMismatch {
                from: from.name().to_string(),
                from_parent: from_orbit.parent.clone(),
                to: to.name().to_string(),
                to_parent: to_orbit.parent.clone(),
            });
        }

        let from_m = require_positive_km_as_m("distance_km", from_orbit.distance_km)
            .map_err(|e| e.for_body(from.name()))?;
        let to_m = require_positive_km_as_m("distance_km", to_orbit.distance_km)
            .map_err(|e| e.for_body(to.name()))?;
        let (inner_m, outer_m) = if from_m <= to_m {
            (from_m, to_m)
        } else {
            (to_m, from_m)
        };

        // Transfer takes half an orbit on the ellipse with a = (r1 + r2) / 2;
        // the outer body sweeps ω2·t = π·(a / r2)^(3/2) in that time.
        let semi_major_axis = (inner_m + outer_m) / 2.0;
        let outer_sweep = PI * (semi_major_axis / outer_m).powf(1.5);
        let phase_angle = PI - outer_sweep;

        debug!(
            "Hohmann phase angle {} -> {}: {:.4} rad",
            from.name(),
            to.name(),
            phase_angle
        );
        Ok(phase_angle)
    }

    pub fn evaluate(&self, body: &CelestialBody, orbit_altitude_km: f64) -> Result<BodyMetrics> {
        let mass_kg = body.mass_kg();
        let radius_km = body.radius_km();

        let metrics = BodyMetrics {
            name: body.name().to_string(),
            mass_kg,
            radius_km,
            surface_gravity_mps2: self
                .surface_gravity(mass_kg, radius_km)
                .map_err(|e| e.for_body(body.name()))?,
            escape_velocity_kmps: self
                .escape_velocity(mass_kg, radius_km)
                .map_err(|e| e.for_body(body.name()))?,
            orbital_velocity_kmps: self
                .orbital_velocity(mass_kg, radius_km, orbit_altitude_km)
                .map_err(|e| e.for_body(body.name()))?,
            parent: body.parent_name().map(str::to_string),
            distance_from_parent_km: body.orbit().map(|orbit| orbit.distance_km),
            color: body.color(),
        };

        debug!(
            "Evaluated {}: g = {:.4} m/s², v_esc = {:.4} km/s",
            metrics.name, metrics.surface_gravity_mps2, metrics.escape_velocity_kmps
        );

        Ok(metrics)
    }

    /// Evaluates every body independently; one failure never hides the others.
    pub fn evaluate_all(
        &self,
        bodies: &[CelestialBody],
        orbit_altitude_km: f64,
    ) -> Vec<Result<BodyMetrics>> {
        bodies
            .iter()
            .map(|body| self.evaluate(body, orbit_altitude_km))
            .collect()
    }
}
