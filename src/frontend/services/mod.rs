//! Frontend services: shared state exposed through Dioxus context.

pub mod context;
pub mod toast;

pub use context::{AuthState, RouterNavigator, use_session_provider};
pub use toast::{Toast, Toaster, use_toaster, use_toaster_provider};
