//! Site configuration and page view-models.

pub mod config;
pub mod pages;
