pub mod fetcher;
pub mod queries;
