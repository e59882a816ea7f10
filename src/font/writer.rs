use std::path::Path;

use log::{debug, info};
use write_fonts::{
    read::{
        tables::name::{Encoding, MacRomanMapping},
        FontRef,
    },
    tables::name::Name,
    types::Tag,
    FontBuilder,
};

use super::table::{FontTable, StyleField, FS_SELECTION, MAC_STYLE};
use crate::error::WriteError;
use crate::utils::write_file_atomically;

const HEAD: Tag = Tag::new(b"head");
const CHECKSUM_ADJUSTMENT_OFFSET: usize = 8;
const CHECKSUM_MAGIC: u32 = 0xB1B0_AFBA;

impl FontTable<'_> {
    /// Compile the edited font and write it to `path`.
    ///
    /// A new file gets the permissions of `source`.
    pub fn save(&self, path: &Path, source: &Path) -> Result<(), WriteError> {
        let data = self.to_bytes()?;
        info!("Writing {} bytes to {}", data.len(), path.display());
        write_file_atomically(path, &data, source)
    }

    /// Compile the edited font.
    ///
    /// The name table is recompiled only if it was edited; `head` and `OS/2`
    /// only have their style fields patched; everything else is copied as is.
    pub fn to_bytes(&self) -> Result<Vec<u8>, WriteError> {
        let mut builder = FontBuilder::new();
        if self.name_edited() {
            let mut name = self.name().clone();
            check_encodings(&name)?;
            name.name_record.sort();
            builder.add_table(&name)?;
        }

        if let Some(mut head) = self.raw_table(HEAD) {
            if let Some(mac_style) = self.mac_style {
                patch_u16(&mut head, MAC_STYLE, mac_style);
            }
            // recomputed once the whole file exists
            head[CHECKSUM_ADJUSTMENT_OFFSET..CHECKSUM_ADJUSTMENT_OFFSET + 4].fill(0);
            builder.add_raw(HEAD, head);
        }
        if let (Some(mut os2), Some(fs_selection)) =
            (self.raw_table(FS_SELECTION.table), self.fs_selection)
        {
            patch_u16(&mut os2, FS_SELECTION, fs_selection);
            builder.add_raw(FS_SELECTION.table, os2);
        }

        builder.copy_missing_tables(self.font.clone());
        let mut data = builder.build();

        // the builder always writes a TrueType header
        let sfnt_version = self.font.table_directory.sfnt_version();
        data[..4].copy_from_slice(&sfnt_version.to_be_bytes());

        update_checksum_adjustment(&mut data)?;
        Ok(data)
    }

    fn raw_table(&self, tag: Tag) -> Option<Vec<u8>> {
        self.font
            .table_data(tag)
            .map(|data| data.as_bytes().to_vec())
    }
}

/// Every record must be representable in its platform encoding.
fn check_encodings(name: &Name) -> Result<(), WriteError> {
    for record in &name.name_record {
        let (name_id, platform_id, encoding_id) =
            (record.name_id, record.platform_id, record.encoding_id);
        match Encoding::new(platform_id, encoding_id) {
            Encoding::Utf16Be => (),
            Encoding::MacRoman => {
                let unmapped = record
                    .string
                    .as_str()
                    .chars()
                    .find(|&c| MacRomanMapping.encode(c).is_none());
                if let Some(character) = unmapped {
                    return Err(WriteError::Encoding {
                        name_id,
                        platform_id,
                        encoding_id,
                        character,
                    });
                }
            }
            Encoding::Unknown => {
                return Err(WriteError::UnknownEncoding {
                    name_id,
                    platform_id,
                    encoding_id,
                })
            }
        }
    }
    Ok(())
}

fn patch_u16(table: &mut [u8], field: StyleField, value: u16) {
    debug!("Setting {field} to {value}");
    table[field.offset..field.offset + 2].copy_from_slice(&value.to_be_bytes());
}

/// Set `head.checksumAdjustment` so the whole file sums to the magic number.
fn update_checksum_adjustment(data: &mut [u8]) -> Result<(), WriteError> {
    let head_offset = {
        let font = FontRef::new(data).map_err(WriteError::Reparse)?;
        font.table_directory
            .table_records()
            .iter()
            .find(|record| record.tag() == HEAD)
            .map(|record| record.offset() as usize)
    };
    let Some(head_offset) = head_offset else {
        return Ok(());
    };
    let start = head_offset + CHECKSUM_ADJUSTMENT_OFFSET;
    // the builder has already written its own adjustment here
    data[start..start + 4].fill(0);
    let adjustment = CHECKSUM_MAGIC.wrapping_sub(checksum(data));
    data[start..start + 4].copy_from_slice(&adjustment.to_be_bytes());
    debug!("checksumAdjustment 0x{adjustment:08X}");
    Ok(())
}

/// Sum of big-endian u32 words, the last one zero-padded.
fn checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}
