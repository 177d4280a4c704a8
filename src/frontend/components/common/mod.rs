//! Common reusable components.

pub mod auth_modal;
pub mod panels;
pub mod spinner;
pub mod toaster;

pub use auth_modal::AuthModal;
pub use panels::{CardList, DataTable, PageHeader, TabBar, TabSpec};
pub use spinner::Spinner;
pub use toaster::ToastViewport;
