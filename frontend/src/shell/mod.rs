//! Application chrome: the navigation sidebar and the fallback view for
//! entries that have no page.

mod fallback;
mod sidebar;

pub use fallback::fallback;
pub use sidebar::{MenuItem, Sidebar};
