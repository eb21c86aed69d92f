use std::fmt;
use std::str::FromStr;

use crate::domain::ConfigError;

/// Guidewire application under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Product {
    Bc,
    Cc,
    Pc,
}

/// Server port of each product, keyed by lowercase product code.
const PORTS: [(&str, &str); 3] = [("bc", "8580"), ("cc", "8080"), ("pc", "8180")];

impl Product {
    pub const ALL: [Product; 3] = [Product::Bc, Product::Cc, Product::Pc];

    /// Product code as written in the configuration file.
    pub fn code(self) -> &'static str {
        match self {
            Product::Bc => "BC",
            Product::Cc => "CC",
            Product::Pc => "PC",
        }
    }

    /// Lowercase code, used as the application context path.
    pub fn context(self) -> &'static str {
        match self {
            Product::Bc => "bc",
            Product::Cc => "cc",
            Product::Pc => "pc",
        }
    }

    pub fn port(self) -> &'static str {
        // Every variant has an entry in PORTS.
        port_for(self.context()).unwrap_or_default()
    }
}

/// Look up the server port for a product code, ignoring case.
pub fn port_for(code: &str) -> Result<&'static str, ConfigError> {
    let code = code.to_ascii_lowercase();
    PORTS
        .iter()
        .find(|(product, _)| *product == code)
        .map(|(_, port)| *port)
        .ok_or(ConfigError::UnknownProductPort(code))
}

impl FromStr for Product {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Product::ALL
            .into_iter()
            .find(|product| product.code() == s)
            .ok_or_else(|| ConfigError::InvalidProduct(s.to_string()))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
