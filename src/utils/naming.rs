/// Separator between the fields of a unique font identifier (nameID 3)
pub const UNIQUE_ID_SEPARATOR: char = ';';

/// Remove every space from a name, as PostScript names allow none
pub fn strip_spaces(name: &str) -> String {
    name.replace(' ', "")
}

/// The names derived from a new family name and the font's variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedNames {
    /// nameID 1 and 16
    pub family: String,
    /// nameID 2
    pub variant: String,
    /// nameID 4, "Family Variant"
    pub full_name: String,
    /// nameID 6, "Family-Variant" with no spaces on either side
    pub postscript_name: String,
}

impl DerivedNames {
    pub fn new(family: &str, variant: &str) -> Self {
        DerivedNames {
            family: family.to_string(),
            variant: variant.to_string(),
            full_name: format!("{family} {variant}"),
            postscript_name: format!("{}-{}", strip_spaces(family), strip_spaces(variant)),
        }
    }

    /// Rewrite a `version;vendor;name` unique identifier to end in the new
    /// PostScript name.
    ///
    /// Identifiers that do not have exactly three fields are left alone and
    /// `None` is returned.
    pub fn unique_id(&self, current: &str) -> Option<String> {
        let parts: Vec<&str> = current.split(UNIQUE_ID_SEPARATOR).collect();
        match parts.as_slice() {
            [version, vendor, _] => Some(format!(
                "{version}{UNIQUE_ID_SEPARATOR}{vendor}{UNIQUE_ID_SEPARATOR}{}",
                self.postscript_name
            )),
            _ => None,
        }
    }
}
