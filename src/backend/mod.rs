//! Backend of the application: session lifecycle, route guard and navigation
//! rules, independent of the UI toolkit (except for the route table).

pub mod guard;
pub mod navigation;
pub mod notify;
pub mod session;
pub mod utils;
