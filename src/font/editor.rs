//! The name table and style bit policies.
//!
//! Exactly one policy runs per invocation. Name IDs repeat across platform
//! and encoding records, so every edit touches all records with a matching
//! ID, never only the first.

use log::debug;
use write_fonts::{tables::name::Name, types::NameId};

use crate::utils::DerivedNames;

/// `macStyle` bit 0
pub const MAC_STYLE_BOLD: u16 = 1;
/// `fsSelection` bit 0
pub const FS_SELECTION_ITALIC: u16 = 1;
/// `fsSelection` bit 5
pub const FS_SELECTION_BOLD: u16 = 1 << 5;

/// The string of the first subfamily (nameID 2) record, if it is non-empty.
pub fn find_variant(name: &Name) -> Option<String> {
    name.name_record
        .iter()
        .find(|record| record.name_id == NameId::SUBFAMILY_NAME)
        .map(|record| record.string.as_str().to_owned())
        .filter(|variant| !variant.is_empty())
}

/// Rewrite the family-derived records in place.
pub fn apply_rename(name: &mut Name, names: &DerivedNames) {
    for record in name.name_record.iter_mut() {
        let replacement = match record.name_id {
            NameId::FAMILY_NAME | NameId::TYPOGRAPHIC_FAMILY_NAME => Some(names.family.clone()),
            NameId::SUBFAMILY_NAME => Some(names.variant.clone()),
            NameId::UNIQUE_ID => names.unique_id(record.string.as_str()),
            NameId::FULL_NAME => Some(names.full_name.clone()),
            NameId::POSTSCRIPT_NAME => Some(names.postscript_name.clone()),
            _ => None,
        };
        if let Some(replacement) = replacement {
            debug!(
                "nameID {} ({}, {}, {}): '{}' -> '{}'",
                record.name_id,
                record.platform_id,
                record.encoding_id,
                record.language_id,
                record.string.as_str(),
                replacement
            );
            record.string = replacement.into();
        }
    }
}

/// Set the bold bit of `head.macStyle`, keeping every other bit.
pub fn bold_mac_style(mac_style: u16) -> u16 {
    mac_style | MAC_STYLE_BOLD
}

/// Set `OS/2.fsSelection` to bold, keeping only the italic bit.
///
/// Every other bit is cleared, REGULAR included.
pub fn bold_fs_selection(fs_selection: u16) -> u16 {
    FS_SELECTION_BOLD | (fs_selection & FS_SELECTION_ITALIC)
}
