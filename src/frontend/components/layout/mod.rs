//! Layout components.

pub mod navigation;
pub mod protected;

pub use navigation::Navigation;
pub use protected::Protected;
