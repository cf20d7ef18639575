//! Console configuration.

use crate::catalog::Catalog;

/// Default store address.
pub const DEFAULT_URI: &str = "mongodb://localhost:27017/";

/// Default logical database.
pub const DEFAULT_DATABASE: &str = "charity";

/// Configuration for a console session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store connection string.
    pub uri: String,

    /// Logical database selected on the store.
    pub database: String,

    /// Collections offered by the menu.
    pub catalog: Catalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            catalog: Catalog::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store connection string.
    #[must_use]
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Sets the database name.
    #[must_use]
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }
}
