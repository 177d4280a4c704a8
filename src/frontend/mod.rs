//! Frontend module for the ECOSPECHE dashboard.

pub mod components;
pub mod pages;
pub mod services;
