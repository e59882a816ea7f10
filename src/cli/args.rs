use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::Parser;
use log::warn;

use crate::error::{Error, Result};
use crate::models::{Config, Mode};

/// Destination value that selects inspection instead of writing.
pub const PRINT_TOKEN: &str = "print";
/// Optional 4th argument selecting bold-marking.
pub const MARK_AS_BOLD_TOKEN: &str = "mark_as_bold";

/// Rename the family of an OpenType font.
///
/// Rewrites the family (1), subfamily (2), unique id (3), full name (4),
/// PostScript name (6) and typographic family (16) name records, using the
/// existing subfamily as the variant. Pass `print` as the destination to dump
/// the name table, or `mark_as_bold` after the destination to set the bold
/// style bits instead of renaming.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "fontname", version)]
pub struct Args {
    /// The new font family name
    #[arg(allow_hyphen_values = true)]
    pub family_name: OsString,

    /// The font file to read
    pub source: PathBuf,

    /// The path to write to, or "print" to dump the name table
    pub destination: PathBuf,

    /// "mark_as_bold" to set the bold style bits instead of renaming
    pub flag: Option<String>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Parse arguments from an iterator, mapping clap failures to a usage error.
    ///
    /// Help and version requests are not failures; clap prints them and exits 0.
    pub fn parse_from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Args::try_parse_from(args) {
            Ok(args) => Ok(args),
            Err(err) if err.use_stderr() => Err(Error::Usage(err)),
            Err(err) => err.exit(),
        }
    }

    /// Validate the arguments and decide on the mode.
    pub fn into_config(self) -> Result<Config> {
        let family_name = decode_family_name(self.family_name)?;

        if !self.source.is_file() {
            return Err(Error::InvalidPath(self.source));
        }

        let mode = if self.destination.as_os_str() == OsStr::new(PRINT_TOKEN) {
            Mode::Inspect
        } else {
            match self.flag.as_deref() {
                Some(MARK_AS_BOLD_TOKEN) => Mode::MarkBold {
                    destination: self.destination,
                },
                Some(other) => {
                    warn!("ignoring unrecognized argument '{other}'");
                    Mode::Rename {
                        destination: self.destination,
                    }
                }
                None => Mode::Rename {
                    destination: self.destination,
                },
            }
        };

        Ok(Config {
            family_name,
            source: self.source,
            mode,
            debug_mode: self.debug,
        })
    }
}

fn decode_family_name(raw: OsString) -> Result<String> {
    raw.into_string()
        .map_err(|raw| Error::Encoding(raw.to_string_lossy().into_owned()))
}
