use crate::bodies::celestial_body::{CelestialBody, Rgb};
use crate::errors::{CalculatorError, Result};

struct CatalogEntry {
    name: &'static str,
    mass_kg: f64,
    radius_km: f64,
    color: Rgb,
    parent: Option<(&'static str, f64)>, // (parent, distance in km)
}

const fn entry(
    name: &'static str,
    mass_kg: f64,
    radius_km: f64,
    color: Rgb,
    parent: Option<(&'static str, f64)>,
) -> CatalogEntry {
    CatalogEntry {
        name,
        mass_kg,
        radius_km,
        color,
        parent,
    }
}

// Parents are listed before their satellites.
const SOLAR_SYSTEM: &[CatalogEntry] = &[
    entry("Sun", 1.989e30, 696_340.0, (255, 255, 0), None),
    entry("Mercury", 3.285e23, 2439.7, (169, 169, 169), Some(("Sun", 57.9e6))),
    entry("Venus", 4.867e24, 6051.8, (255, 198, 73), Some(("Sun", 108.2e6))),
    entry("Earth", 5.972e24, 6371.0, (0, 0, 255), Some(("Sun", 149.6e6))),
    entry("Moon", 7.348e22, 1737.4, (128, 128, 128), Some(("Earth", 384_400.0))),
    entry("Mars", 6.39e23, 3389.5, (255, 0, 0), Some(("Sun", 227.9e6))),
    entry("Phobos", 1.06e16, 11.267, (169, 169, 169), Some(("Mars", 9377.0))),
    entry("Deimos", 1.48e15, 6.2, (169, 169, 169), Some(("Mars", 23_460.0))),
    entry("Jupiter", 1.898e27, 69_911.0, (255, 165, 0), Some(("Sun", 778.5e6))),
    entry("Io", 8.932e22, 1821.6, (255, 255, 150), Some(("Jupiter", 421_700.0))),
    entry("Europa", 4.800e22, 1560.8, (255, 220, 200), Some(("Jupiter", 671_100.0))),
    entry("Ganymede", 1.482e23, 2634.1, (169, 169, 169), Some(("Jupiter", 1_070_400.0))),
    entry("Callisto", 1.076e23, 2410.3, (128, 128, 128), Some(("Jupiter", 1_882_700.0))),
    entry("Saturn", 5.683e26, 58_232.0, (238, 232, 205), Some(("Sun", 1.434e9))),
    entry("Titan", 1.345e23, 2574.73, (255, 200, 100), Some(("Saturn", 1_221_870.0))),
    entry("Rhea", 2.307e21, 763.8, (200, 200, 200), Some(("Saturn", 527_108.0))),
    entry("Iapetus", 1.806e21, 734.5, (200, 200, 200), Some(("Saturn", 3_560_820.0))),
    entry("Enceladus", 1.080e20, 252.1, (255, 255, 255), Some(("Saturn", 237_948.0))),
    entry("Uranus", 8.681e25, 25_362.0, (173, 216, 230), Some(("Sun", 2.871e9))),
    entry("Titania", 3.527e21, 788.9, (169, 169, 169), Some(("Uranus", 435_910.0))),
    entry("Oberon", 3.014e21, 761.4, (169, 169, 169), Some(("Uranus", 583_520.0))),
    entry("Miranda", 6.59e19, 235.8, (169, 169, 169), Some(("Uranus", 129_390.0))),
    entry("Neptune", 1.024e26, 24_622.0, (0, 0, 139), Some(("Sun", 4.495e9))),
    entry("Triton", 2.139e22, 1353.4, (200, 200, 200), Some(("Neptune", 354_759.0))),
    entry("Naiad", 1.9e17, 33.0, (169, 169, 169), Some(("Neptune", 48_227.0))),
];

impl CatalogEntry {
    fn build(&self) -> Result<CelestialBody> {
        let body = CelestialBody::new(self.name, self.mass_kg, self.radius_km)?.with_color(self.color);
        match self.parent {
            Some((parent, distance_km)) => body.orbiting(parent, distance_km),
            None => Ok(body),
        }
    }
}

/// The Sun, the eight planets and their major moons.
pub fn solar_system() -> Result<Vec<CelestialBody>> {
    SOLAR_SYSTEM.iter().map(CatalogEntry::build).collect()
}

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Result<CelestialBody> {
    SOLAR_SYSTEM
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| CalculatorError::UnknownBody(name.to_string()))
        .and_then(CatalogEntry::build)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SOLAR_SYSTEM.iter().map(|entry| entry.name)
}
