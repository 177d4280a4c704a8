//! Utility modules for the dashboard backend.
//!
//! Configuration, data directory paths, embedded styles and the routing table.

/// Application configuration loading.
pub mod config;
/// Embedded stylesheets.
pub mod css_loader;
/// Path utilities for the data directory.
pub mod paths;
/// Application routing system.
pub mod route;
