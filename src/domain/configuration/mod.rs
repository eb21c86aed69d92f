mod product;
pub mod source;
mod test_configuration;

pub use product::{Product, port_for};
pub use source::{ConfigDocument, ConfigSource, ROOT_TAG};
pub use test_configuration::TestConfiguration;
