pub mod intake;
pub mod logger;
pub mod scoring;
pub mod uploads;
pub mod validation;
