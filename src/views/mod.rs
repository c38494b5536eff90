// src/views/mod.rs

pub mod auth;
pub mod layout;
pub mod question;
pub mod quiz;

// Re-export commonly used functions from layout
pub use layout::page;
