//! Application pages, one per route.

pub mod certification;
pub mod dashboard;
pub mod landing;
pub mod references;
pub mod suivi_controle;
pub mod tracabilite;

pub use certification::Certification;
pub use dashboard::Dashboard;
pub use landing::Landing;
pub use references::References;
pub use suivi_controle::SuiviControle;
pub use tracabilite::Tracabilite;
