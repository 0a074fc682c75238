pub mod left;
pub mod menu;
pub mod menu_config;
pub mod sidebar;

pub use left::Left;
pub use sidebar::Sidebar;
