pub mod catalog;
pub mod celestial_body;
