pub mod countries;
pub mod report;
