//! UI components and layouts.

pub mod common;
pub mod layout;
