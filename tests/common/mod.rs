//! Fixture fonts and helpers shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use write_fonts::{
    read::{FontRef, TableProvider},
    tables::name::{Name, NameRecord},
    types::{NameId, Tag},
    FontBuilder,
};

pub const HEAD: Tag = Tag::new(b"head");
pub const OS2: Tag = Tag::new(b"OS/2");
pub const NAME: Tag = Tag::new(b"name");
pub const OPAQUE: Tag = Tag::new(b"zzzz");
pub const OPAQUE_DATA: &[u8] = b"left exactly as it was";

pub const MAC: (u16, u16, u16) = (1, 0, 0);
pub const WIN: (u16, u16, u16) = (3, 1, 0x409);

/// A "Old Sans Bold Italic" name table in Mac Roman and Windows Unicode.
///
/// The Mac unique id has three fields, the Windows one only two.
pub fn bold_italic_records() -> Vec<((u16, u16, u16), u16, &'static str)> {
    vec![
        (MAC, 1, "Old Sans"),
        (MAC, 2, "Bold Italic"),
        (MAC, 3, "1.0;VEND;OldSans-BoldItalic"),
        (MAC, 4, "Old Sans Bold Italic"),
        (MAC, 6, "OldSans-BoldItalic"),
        (WIN, 0, "Copyright 2018 Somebody"),
        (WIN, 1, "Old Sans"),
        (WIN, 2, "Bold Italic"),
        (WIN, 3, "1.0;OldSans-BoldItalic"),
        (WIN, 4, "Old Sans Bold Italic"),
        (WIN, 5, "Version 1.0"),
        (WIN, 6, "OldSans-BoldItalic"),
        (WIN, 16, "Old Sans"),
    ]
}

pub fn build_font(
    records: &[((u16, u16, u16), u16, &str)],
    mac_style: u16,
    fs_selection: u16,
) -> Vec<u8> {
    build_font_with(records, Some(mac_style), Some(fs_selection))
}

/// Like [`build_font`], leaving out `head` or `OS/2` when given `None`.
pub fn build_font_with(
    records: &[((u16, u16, u16), u16, &str)],
    mac_style: Option<u16>,
    fs_selection: Option<u16>,
) -> Vec<u8> {
    let mut name = Name::default();
    name.name_record = records
        .iter()
        .map(|&((platform, encoding, language), name_id, string)| {
            NameRecord::new(
                platform,
                encoding,
                language,
                NameId::new(name_id),
                string.to_string().into(),
            )
        })
        .collect();
    name.name_record.sort();

    let mut builder = FontBuilder::new();
    builder.add_table(&name).unwrap();
    if let Some(mac_style) = mac_style {
        builder.add_raw(HEAD, head_table(mac_style));
    }
    if let Some(fs_selection) = fs_selection {
        builder.add_raw(OS2, os2_table(fs_selection));
    }
    builder.add_raw(OPAQUE, OPAQUE_DATA.to_vec());
    builder.build()
}

fn head_table(mac_style: u16) -> Vec<u8> {
    let mut head = Vec::new();
    head.extend(0x0001_0000u32.to_be_bytes()); // version
    head.extend(0x0002_8000u32.to_be_bytes()); // fontRevision
    head.extend(0u32.to_be_bytes()); // checksumAdjustment
    head.extend(0x5F0F_3CF5u32.to_be_bytes()); // magicNumber
    head.extend(3u16.to_be_bytes()); // flags
    head.extend(1000u16.to_be_bytes()); // unitsPerEm
    head.extend([0u8; 16]); // created, modified
    head.extend((-50i16).to_be_bytes()); // xMin
    head.extend((-200i16).to_be_bytes()); // yMin
    head.extend(600i16.to_be_bytes()); // xMax
    head.extend(800i16.to_be_bytes()); // yMax
    head.extend(mac_style.to_be_bytes());
    head.extend(8u16.to_be_bytes()); // lowestRecPPEM
    head.extend(2i16.to_be_bytes()); // fontDirectionHint
    head.extend(0i16.to_be_bytes()); // indexToLocFormat
    head.extend(0i16.to_be_bytes()); // glyphDataFormat
    assert_eq!(head.len(), 54);
    head
}

fn os2_table(fs_selection: u16) -> Vec<u8> {
    let mut os2 = vec![0u8; 96];
    os2[0..2].copy_from_slice(&4u16.to_be_bytes()); // version
    os2[4..6].copy_from_slice(&700u16.to_be_bytes()); // usWeightClass
    os2[6..8].copy_from_slice(&5u16.to_be_bytes()); // usWidthClass
    os2[58..62].copy_from_slice(b"TEST"); // achVendID
    os2[62..64].copy_from_slice(&fs_selection.to_be_bytes());
    os2[64..66].copy_from_slice(&0x20u16.to_be_bytes()); // usFirstCharIndex
    os2
}

/// Rewrite the encoding ID of the first record with this platform and
/// nameID, directly in the compiled bytes.
pub fn set_encoding_id(data: &mut [u8], platform_id: u16, name_id: u16, encoding_id: u16) {
    let offset = table_offset(data, NAME);
    let count = u16::from_be_bytes([data[offset + 2], data[offset + 3]]) as usize;
    let record = (0..count)
        .map(|i| offset + 6 + 12 * i)
        .find(|&record| {
            u16::from_be_bytes([data[record], data[record + 1]]) == platform_id
                && u16::from_be_bytes([data[record + 6], data[record + 7]]) == name_id
        })
        .unwrap();
    data[record + 2..record + 4].copy_from_slice(&encoding_id.to_be_bytes());
}

fn table_offset(data: &[u8], tag: Tag) -> usize {
    FontRef::new(data)
        .unwrap()
        .table_directory
        .table_records()
        .iter()
        .find(|record| record.tag() == tag)
        .unwrap()
        .offset() as usize
}

/// `(platform, nameID, string)` for every record of a compiled font.
pub fn name_records(data: &[u8]) -> Vec<(u16, u16, String)> {
    let font = FontRef::new(data).unwrap();
    let name = font.name().unwrap();
    name.name_record()
        .iter()
        .map(|record| {
            (
                record.platform_id(),
                record.name_id().to_u16(),
                record.string(name.string_data()).unwrap().to_string(),
            )
        })
        .collect()
}

pub fn name_string(data: &[u8], platform: u16, name_id: u16) -> String {
    name_records(data)
        .into_iter()
        .find(|(p, id, _)| *p == platform && *id == name_id)
        .map(|(_, _, string)| string)
        .unwrap()
}

pub fn table<'a>(data: &'a [u8], tag: Tag) -> &'a [u8] {
    FontRef::new(data)
        .unwrap()
        .table_data(tag)
        .unwrap()
        .as_bytes()
}

pub fn read_u16(data: &[u8], tag: Tag, offset: usize) -> u16 {
    let table = table(data, tag);
    u16::from_be_bytes([table[offset], table[offset + 1]])
}

pub fn mac_style(data: &[u8]) -> u16 {
    read_u16(data, HEAD, 44)
}

pub fn fs_selection(data: &[u8]) -> u16 {
    read_u16(data, OS2, 62)
}

/// Whole-file checksum, which is 0xB1B0AFBA for a correctly adjusted font.
pub fn file_checksum(data: &[u8]) -> u32 {
    data.chunks(4).fold(0u32, |sum, chunk| {
        let mut word = [0u8; 4];
        word[..chunk.len()].copy_from_slice(chunk);
        sum.wrapping_add(u32::from_be_bytes(word))
    })
}

pub fn fontname<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_fontname"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub fn file_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
