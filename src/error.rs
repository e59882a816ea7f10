use std::io;
use std::path::PathBuf;

use thiserror::Error;
use write_fonts::read::ReadError;
use write_fonts::types::{NameId, Tag};

/// Error type for the fontname tool
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number or shape of command line arguments
    #[error("{}", usage_summary(.0))]
    Usage(#[source] clap::Error),
    /// The family name argument is not valid text
    #[error("unable to convert argument to Unicode: '{0}'")]
    Encoding(String),
    /// Source path missing or not a regular file
    #[error("the path '{}' does not appear to be a valid file path", .0.display())]
    InvalidPath(PathBuf),
    /// Source could not be read or is not a single usable font
    #[error("unable to load font '{}'", .path.display())]
    Font {
        path: PathBuf,
        #[source]
        source: FontError,
    },
    /// No usable nameID 2 record
    #[error("unable to detect the font variant from the OpenType name table in '{}'", .0.display())]
    VariantNotFound(PathBuf),
    /// Destination could not be written
    #[error("unable to write new name to OpenType tables for '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },
}

/// Why a source font was rejected.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("io failed: '{0}'")]
    Io(#[from] io::Error),
    #[error("font collections are not supported, found {0} fonts")]
    Collection(u32),
    #[error("not an OpenType font: {0}")]
    Parse(#[from] ttf_parser::FaceParsingError),
    #[error("the font has no '{0}' table")]
    MissingTable(Tag),
    #[error("could not parse font: {0}")]
    Read(#[from] ReadError),
}

/// Why a destination font could not be produced.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Build(#[from] write_fonts::BuilderError),
    #[error("nameID {name_id} (platform {platform_id}, encoding {encoding_id}) cannot hold the character '{character}'")]
    Encoding {
        name_id: NameId,
        platform_id: u16,
        encoding_id: u16,
        character: char,
    },
    #[error("nameID {name_id} uses an unsupported encoding (platform {platform_id}, encoding {encoding_id}) and cannot be rewritten")]
    UnknownEncoding {
        name_id: NameId,
        platform_id: u16,
        encoding_id: u16,
    },
    #[error("the compiled font could not be read back: {0}")]
    Reparse(#[source] ReadError),
    #[error("io failed: '{0}'")]
    Io(#[from] io::Error),
    #[error("could not replace destination: '{0}'")]
    Persist(#[from] tempfile::PersistError),
}

fn usage_summary(err: &clap::Error) -> &'static str {
    match err.kind() {
        clap::error::ErrorKind::MissingRequiredArgument => {
            "you did not include enough arguments to the script"
        }
        _ => "unable to interpret the command line arguments",
    }
}

/// Result type alias for fontname operations
pub type Result<T> = std::result::Result<T, Error>;
