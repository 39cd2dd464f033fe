pub mod atmosphere;
pub mod header;
pub mod language_switch;
pub mod mobile_menu;

pub use header::Header;
