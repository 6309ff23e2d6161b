//! Command handlers.

pub mod pages;
pub mod paths;
pub mod serve;
