//! Loading, editing and saving the font

pub mod check;
pub mod editor;
pub mod table;
mod writer;

pub use check::check_font_data;
pub use table::{FontTable, FS_SELECTION, MAC_STYLE};
