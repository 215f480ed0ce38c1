// Caller side of the catalog: listing output and the interactive menu.

pub mod menu;
pub mod render;

pub use menu::{MenuChoice, MenuSession};
pub use render::{render_records, DisplayFormat};
