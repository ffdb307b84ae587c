mod app_state;
mod modal;
mod routes;
mod screen_state;

pub use app_state::*;
pub use modal::*;
pub use routes::*;
pub use screen_state::*;
