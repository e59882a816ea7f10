pub mod file;
pub mod logging;
pub mod naming;

pub use file::write_file_atomically;
pub use logging::init_logging;
pub use naming::DerivedNames;
