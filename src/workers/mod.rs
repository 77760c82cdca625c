pub mod controller;
pub mod core;

pub use controller::DashboardController;
pub use self::core::{Command, EventSender};
