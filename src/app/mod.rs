pub mod fonts;
pub mod gui;
pub mod session;

pub use gui::RequestTesterApp;
pub use session::Session;
