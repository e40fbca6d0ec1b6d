//! UI Components
//!
//! The navigation shell and shared loading states.

pub mod app_layout;
pub mod header;
pub mod loading;
pub mod sidebar;

pub use app_layout::AppLayout;
pub use header::Header;
pub use loading::{InlineLoading, Loading};
pub use sidebar::Sidebar;
