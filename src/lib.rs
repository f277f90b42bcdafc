pub mod bodies;
pub mod constants;
pub mod errors;
pub mod physics_system;
pub mod report_system;
pub mod utils;

pub use constants::*;
pub use bodies::catalog;
pub use bodies::celestial_body::{CelestialBody, Orbit, Rgb};
pub use errors::{CalculatorError, Result};

// Re-export commonly used items from physics_system
pub use physics_system::calculator::{BodyMetrics, PhysicsCalculator};

// Re-export commonly used items from report_system
pub use report_system::report::{RenderOptions, Report};
pub use report_system::transfer::TransferSummary;

// Re-export commonly used utilities
pub use utils::vector2d::Vector2D;
