//! Display and notification surfaces
//!
//! Implementations of the timer's collaborator traits used by the server.

pub mod display;
pub mod notifier;

// Re-export main types
pub use display::WatchDisplay;
pub use notifier::{LatestNotification, Notification};
