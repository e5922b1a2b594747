// src/lib.rs
pub mod client;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use client::AuthApiClient;
pub use report::{Report, TestCase};
pub use scenario::Scenario;
