// Adapters layer: concrete implementations of the domain ports.

pub mod fs;
pub mod mrml;

pub use self::fs::FsTemplateSource;
pub use self::mrml::MrmlConverter;
