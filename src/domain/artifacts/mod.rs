//! Text of the generated artifacts.

pub mod launcher;
pub mod pipeline;
pub mod properties;
pub mod separators;

pub use launcher::Launcher;
pub use pipeline::Pipeline;
pub use properties::SuiteProperties;
