pub mod card;
pub mod grid;
pub mod header;
pub mod page;
pub mod sidebar;
pub mod spinner;
pub mod view;
