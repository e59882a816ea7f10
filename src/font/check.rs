use std::path::Path;

use log::debug;
use ttf_parser::{RawFace, Tag};

use crate::error::FontError;

/// Check that `data` is a single font with a name table before loading it.
pub fn check_font_data(path: &Path, data: &[u8]) -> Result<(), FontError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "ttf" && ext != "otf" {
        debug!("Unusual extension for a font file: {}", path.display());
    }

    if let Some(count) = ttf_parser::fonts_in_collection(data) {
        return Err(FontError::Collection(count));
    }

    let face = RawFace::parse(data, 0)?;
    if face.table(Tag::from_bytes(b"name")).is_none() {
        return Err(FontError::MissingTable(write_fonts::types::Tag::new(b"name")));
    }

    debug!("Valid font file: {}", path.display());
    Ok(())
}
