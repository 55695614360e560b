//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::PennyPaths;
pub use settings::Settings;
