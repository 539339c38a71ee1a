//! Render configuration types.

/// Indentation unit used when no configuration is given.
pub const DEFAULT_INDENT: &str = "  ";

/// Defaults applied to every renderer before any [`RenderOption`](crate::RenderOption).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// String written at the start of every new line of the JSON body.
    pub prefix: String,
    /// String written once per nesting level after the prefix.
    pub indent: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration builder.
    #[must_use]
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }

    /// Configuration producing compact, single-line JSON bodies.
    #[must_use]
    pub fn compact() -> Self {
        Self {
            prefix: String::new(),
            indent: String::new(),
        }
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug, Clone, Default)]
pub struct RenderConfigBuilder {
    prefix: Option<String>,
    indent: Option<String>,
}

impl RenderConfigBuilder {
    /// Set the line prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Set the indentation unit.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = Some(indent.into());
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> RenderConfig {
        let defaults = RenderConfig::default();
        RenderConfig {
            prefix: self.prefix.unwrap_or(defaults.prefix),
            indent: self.indent.unwrap_or(defaults.indent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.prefix, "");
        assert_eq!(config.indent, "  ");
    }

    #[test]
    fn builder_overrides() {
        let config = RenderConfig::builder().prefix(">>").indent("\t").build();

        assert_eq!(config.prefix, ">>");
        assert_eq!(config.indent, "\t");
    }

    #[test]
    fn builder_keeps_defaults() {
        let config = RenderConfig::builder().prefix("//").build();

        assert_eq!(config.prefix, "//");
        assert_eq!(config.indent, DEFAULT_INDENT);
    }

    #[test]
    fn compact_config() {
        let config = RenderConfig::compact();
        assert!(config.prefix.is_empty());
        assert!(config.indent.is_empty());
    }
}
