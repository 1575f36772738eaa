pub mod constants;
pub mod detector;
pub mod fetcher;
