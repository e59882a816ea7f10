use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration for a single rename run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// New family name, verbatim
    pub family_name: String,
    /// Font to read
    pub source: PathBuf,
    /// What to do with it
    pub mode: Mode,
    /// Enable debug output
    pub debug_mode: bool,
}

/// The one policy applied to the loaded font.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Dump the style bits and name records; nothing is written.
    Inspect,
    /// Set the bold bits in `head` and `OS/2`, names untouched.
    MarkBold { destination: PathBuf },
    /// Rewrite the family-derived name records.
    Rename { destination: PathBuf },
}

impl Mode {
    /// Where the edited font goes, if anywhere.
    pub fn destination(&self) -> Option<&Path> {
        match self {
            Mode::Inspect => None,
            Mode::MarkBold { destination } | Mode::Rename { destination } => {
                Some(destination.as_path())
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Inspect => write!(f, "inspect"),
            Mode::MarkBold { destination } => write!(f, "mark as bold -> {}", destination.display()),
            Mode::Rename { destination } => write!(f, "rename -> {}", destination.display()),
        }
    }
}
