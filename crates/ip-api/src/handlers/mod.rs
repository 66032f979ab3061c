//! API request handlers

pub mod projects;

pub use projects::*;
