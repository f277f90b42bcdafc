pub mod report;
pub mod transfer;
