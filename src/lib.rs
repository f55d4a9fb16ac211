//! Resume Filter Client
//!
//! This library provides the client side of the resume filter: PDF intake
//! and validation, the upload store, and the submission workflow that sends
//! resumes plus a job description to the external scoring service and keeps
//! the ranked shortlist it returns.

pub mod app_state;
pub mod config;
pub mod models;
pub mod services;
pub mod views;
