pub mod filter;
pub mod resume;
pub mod submission;
