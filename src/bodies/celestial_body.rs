use std::f64::consts::TAU;
use std::fmt;

use crate::errors::Result;
use crate::physics_system::units::{
    km_to_m, parse_positive, require_non_negative, require_positive,
    require_positive_km_as_m,
};
use crate::utils::vector2d::Vector2D;

pub type Rgb = (u8, u8, u8);

pub const DEFAULT_COLOR: Rgb = (255, 255, 255);

#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    pub parent: String,
    pub distance_km: f64, // center to center
}

/// A body validated at construction: mass and radius are positive and finite.
/// Fields are private so a value can never drift out of that state.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    name: String,
    mass_kg: f64,
    radius_km: f64,
    color: Rgb,
    orbit: Option<Orbit>,
}

impl CelestialBody {
    pub fn new(name: impl Into<String>, mass_kg: f64, radius_km: f64) -> Result<Self> {
        let name = name.into();
        let mass_kg = require_positive("mass_kg", mass_kg).map_err(|e| e.for_body(&name))?;
        require_positive_km_as_m("radius_km", radius_km).map_err(|e| e.for_body(&name))?;

        Ok(CelestialBody {
            name,
            mass_kg,
            radius_km,
            color: DEFAULT_COLOR,
            orbit: None,
        })
    }

    /// Builds a body from raw command-line text.
    pub fn parse(name: &str, mass_kg: &str, radius_km: &str) -> Result<Self> {
        let mass_kg = parse_positive("mass_kg", mass_kg).map_err(|e| e.for_body(name))?;
        let radius_km = parse_positive("radius_km", radius_km).map_err(|e| e.for_body(name))?;
        CelestialBody::new(name, mass_kg, radius_km)
    }

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = color;
        self
    }

    pub fn orbiting(mut self, parent: impl Into<String>, distance_km: f64) -> Result<Self> {
        let distance_km =
            require_non_negative("distance_km", distance_km).map_err(|e| e.for_body(&self.name))?;
        self.orbit = Some(Orbit {
            parent: parent.into(),
            distance_km,
        });
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass_kg(&self) -> f64 {
        self.mass_kg
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    pub fn radius_m(&self) -> f64 {
        km_to_m(self.radius_km)
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn orbit(&self) -> Option<&Orbit> {
        self.orbit.as_ref()
    }

    pub fn parent_name(&self) -> Option<&str> {
        self.orbit.as_ref().map(|orbit| orbit.parent.as_str())
    }

    /// Position in meters relative to the parent at the given orbital angle.
    /// Bodies without a parent sit at the origin.
    pub fn position_at(&self, angle_radians: f64) -> Vector2D {
        match &self.orbit {
            Some(orbit) => {
                Vector2D::from_polar(km_to_m(orbit.distance_km), angle_radians.rem_euclid(TAU))
            }
            None => Vector2D::ZERO,
        }
    }
}

impl fmt::Display for CelestialBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2e} kg, {} km", self.name, self.mass_kg, self.radius_km)?;
        if let Some(parent) = self.parent_name() {
            write!(f, ", orbiting {}", parent)?;
        }
        write!(f, ")")
    }
}
