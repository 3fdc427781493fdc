//! Configuration for SableKV
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a SableKV datastore
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Store Configuration
    // -------------------------------------------------------------------------
    /// Store domain (the single table-like namespace all items live in)
    pub domain: String,

    // -------------------------------------------------------------------------
    // Encoding Configuration
    // -------------------------------------------------------------------------
    /// Replace newline characters with the legacy sentinel token before
    /// storing character strings. Required for transports that reorder
    /// newline-containing multivalued attributes.
    pub newline_escaping: bool,

    // -------------------------------------------------------------------------
    // Consistency Configuration
    // -------------------------------------------------------------------------
    /// Block after each write until the item is visible to reads
    pub wait_for_consistency: bool,

    /// Visibility poll interval (milliseconds)
    pub consistency_poll_ms: u64,

    /// Max total time to wait for visibility (milliseconds)
    pub consistency_ceiling_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: "sablekv".to_string(),
            newline_escaping: true,
            wait_for_consistency: false,
            consistency_poll_ms: 100,
            consistency_ceiling_ms: 10_000,
        }
    }
}

impl Config {
    /// Create a config for the given domain with default settings
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store domain
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.config.domain = domain.into();
        self
    }

    /// Enable or disable newline-sentinel escaping on writes
    pub fn newline_escaping(mut self, enabled: bool) -> Self {
        self.config.newline_escaping = enabled;
        self
    }

    /// Enable or disable the post-write consistency wait
    pub fn wait_for_consistency(mut self, enabled: bool) -> Self {
        self.config.wait_for_consistency = enabled;
        self
    }

    /// Set the consistency poll interval (in milliseconds)
    pub fn consistency_poll_ms(mut self, ms: u64) -> Self {
        self.config.consistency_poll_ms = ms;
        self
    }

    /// Set the consistency wait ceiling (in milliseconds)
    pub fn consistency_ceiling_ms(mut self, ms: u64) -> Self {
        self.config.consistency_ceiling_ms = ms;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
