// src/services/mod.rs

pub mod authoring;
pub mod identity;
pub mod quiz;
pub mod results;
pub mod scoring;
