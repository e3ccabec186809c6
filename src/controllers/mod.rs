pub mod link;
pub mod tab;
pub use link::parse_tab_url;
pub use tab::{TabController, TabSource};
