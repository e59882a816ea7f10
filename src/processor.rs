use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{Error, FontError, Result};
use crate::font::{editor, check_font_data, FontTable, FS_SELECTION, MAC_STYLE};
use crate::models::{Config, Mode};
use crate::utils::DerivedNames;

/// Run one invocation: load the source, apply the configured mode and save.
pub fn run(config: &Config) -> Result<()> {
    let font_error = |source: FontError| Error::Font {
        path: config.source.clone(),
        source,
    };

    info!("Reading {}", config.source.display());
    let data = fs::read(&config.source).map_err(|err| font_error(err.into()))?;
    check_font_data(&config.source, &data).map_err(font_error)?;
    let mut font = FontTable::load(&data).map_err(font_error)?;
    debug!(
        "Loaded {} name records from {}",
        font.name().name_record.len(),
        config.source.display()
    );

    match &config.mode {
        Mode::Inspect => {
            for line in font.inspect_lines() {
                println!("{line}");
            }
            return Ok(());
        }
        Mode::MarkBold { .. } => mark_as_bold(&mut font).map_err(font_error)?,
        Mode::Rename { .. } => {
            rename(&mut font, &config.family_name, &config.source)?;
            for line in font.record_lines() {
                println!("{line}");
            }
        }
    }

    if let Some(destination) = config.mode.destination() {
        save(&font, destination, &config.source)?;
    }
    Ok(())
}

/// Set the bold style bits; both `head` and `OS/2` must be present.
pub fn mark_as_bold(font: &mut FontTable) -> std::result::Result<(), FontError> {
    let mac_style = font
        .style(MAC_STYLE)
        .ok_or(FontError::MissingTable(MAC_STYLE.table))?;
    let fs_selection = font
        .style(FS_SELECTION)
        .ok_or(FontError::MissingTable(FS_SELECTION.table))?;
    font.mac_style = Some(editor::bold_mac_style(mac_style));
    font.fs_selection = Some(editor::bold_fs_selection(fs_selection));
    debug!(
        "macStyle {mac_style} -> {:?}, fsSelection {fs_selection} -> {:?}",
        font.mac_style, font.fs_selection
    );
    Ok(())
}

/// Rename the family, keeping the variant from the first subfamily record.
pub fn rename(font: &mut FontTable, family_name: &str, source: &Path) -> Result<()> {
    let variant = editor::find_variant(font.name())
        .ok_or_else(|| Error::VariantNotFound(source.to_path_buf()))?;
    let names = DerivedNames::new(family_name, &variant);
    info!(
        "Renaming to '{}' ({}), variant '{variant}'",
        names.full_name, names.postscript_name
    );
    editor::apply_rename(font.name_mut(), &names);
    Ok(())
}

fn save(font: &FontTable, destination: &Path, template: &Path) -> Result<()> {
    font.save(destination, template).map_err(|source| Error::Write {
        path: destination.to_path_buf(),
        source,
    })?;
    println!("[OK] Updated '{}", destination.display());
    Ok(())
}
