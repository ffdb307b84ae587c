pub mod final_report;
pub mod home;
pub mod initial;
pub mod multiplier;
pub mod not_found;
pub mod shock;
pub mod upload;

use crate::components::Component;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}
