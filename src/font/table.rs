use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use write_fonts::{
    from_obj::ToOwnedTable,
    read::{
        tables::name::{Encoding, Name as ReadName},
        FontRef, ReadError, TableProvider,
    },
    tables::name::{Name, NameRecord},
    types::{NameId, Tag},
};

use crate::error::FontError;

/// A 16-bit style bitfield at a fixed offset inside a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleField {
    pub table: Tag,
    pub offset: usize,
    pub label: &'static str,
}

/// `head.macStyle`
pub const MAC_STYLE: StyleField = StyleField {
    table: Tag::new(b"head"),
    offset: 44,
    label: "HEAD macStyle",
};

/// `OS/2.fsSelection`
pub const FS_SELECTION: StyleField = StyleField {
    table: Tag::new(b"OS/2"),
    offset: 62,
    label: "OS/2 fsSelection",
};

impl StyleField {
    fn read(&self, font: &FontRef) -> Result<Option<u16>, ReadError> {
        match font.table_data(self.table) {
            Some(data) => data.read_at::<u16>(self.offset).map(Some),
            None => Ok(None),
        }
    }
}

impl fmt::Display for StyleField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Identifies a record: platform, encoding, language and name ID.
type RecordKey = (u16, u16, u16, NameId);

fn record_key(record: &NameRecord) -> RecordKey {
    (
        record.platform_id,
        record.encoding_id,
        record.language_id,
        record.name_id,
    )
}

/// The editable view of one font.
///
/// Holds an owned copy of the name table and the two style bitfields; every
/// other table stays borrowed from the source bytes until the font is saved.
/// The name table is only recompiled once it has been edited.
#[derive(Clone)]
pub struct FontTable<'a> {
    pub(crate) font: FontRef<'a>,
    name: Name,
    name_edited: bool,
    /// Source bytes of records whose encoding cannot be decoded.
    undecoded: BTreeMap<RecordKey, Vec<u8>>,
    pub mac_style: Option<u16>,
    pub fs_selection: Option<u16>,
}

impl<'a> FontTable<'a> {
    pub fn load(data: &'a [u8]) -> Result<Self, FontError> {
        let font = FontRef::new(data)?;
        let (name, undecoded) = match font.name() {
            Ok(name) => (name.to_owned_table(), undecoded_strings(&name)),
            Err(ReadError::TableIsMissing(_)) => {
                return Err(FontError::MissingTable(Tag::new(b"name")))
            }
            Err(err) => return Err(err.into()),
        };
        let mac_style = MAC_STYLE.read(&font)?;
        let fs_selection = FS_SELECTION.read(&font)?;
        Ok(FontTable {
            font,
            name,
            name_edited: false,
            undecoded,
            mac_style,
            fs_selection,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Mutable access to the name table, which marks it for recompiling.
    pub fn name_mut(&mut self) -> &mut Name {
        self.name_edited = true;
        &mut self.name
    }

    pub fn name_edited(&self) -> bool {
        self.name_edited
    }

    /// The current value of a style field, if its table is present.
    pub fn style(&self, field: StyleField) -> Option<u16> {
        if field.table == MAC_STYLE.table {
            self.mac_style
        } else if field.table == FS_SELECTION.table {
            self.fs_selection
        } else {
            None
        }
    }

    /// `(nameID, string)` for every record, in table order.
    ///
    /// Records in an encoding that cannot be decoded show their source bytes,
    /// with anything outside printable ASCII escaped.
    pub fn records(&self) -> impl Iterator<Item = (u16, Cow<'_, str>)> + '_ {
        self.name.name_record.iter().map(|record| {
            let string = match self.undecoded.get(&record_key(record)) {
                Some(bytes) => Cow::Owned(escape_bytes(bytes)),
                None => Cow::Borrowed(record.string.as_str()),
            };
            (record.name_id.to_u16(), string)
        })
    }

    /// The lines printed for a record dump, `"<nameID> <string>"`.
    pub fn record_lines(&self) -> Vec<String> {
        self.records()
            .map(|(name_id, string)| format!("{name_id} {string}"))
            .collect()
    }

    /// The full inspection report: both style fields, then every record.
    pub fn inspect_lines(&self) -> Vec<String> {
        let style_line = |field: StyleField| match self.style(field) {
            Some(value) => format!("{field}: {value}"),
            None => format!("{field}: missing"),
        };
        let mut lines = vec![style_line(MAC_STYLE), style_line(FS_SELECTION)];
        lines.extend(self.record_lines());
        lines
    }
}

fn undecoded_strings(name: &ReadName) -> BTreeMap<RecordKey, Vec<u8>> {
    let storage = name.string_data().as_bytes();
    name.name_record()
        .iter()
        .filter(|record| {
            matches!(
                Encoding::new(record.platform_id(), record.encoding_id()),
                Encoding::Unknown
            )
        })
        .filter_map(|record| {
            let start = record.string_offset().to_u32() as usize;
            let bytes = storage.get(start..start + record.length() as usize)?;
            let key = (
                record.platform_id(),
                record.encoding_id(),
                record.language_id(),
                record.name_id(),
            );
            Some((key, bytes.to_vec()))
        })
        .collect()
}

fn escape_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .flat_map(|&byte| std::ascii::escape_default(byte))
        .map(char::from)
        .collect()
}
