// src/lib.rs
pub mod banner;
pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod prompt;
pub mod providers;
pub mod runner;
