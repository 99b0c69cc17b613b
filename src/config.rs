//! Run configuration — the filtering options and the root filter.
//!
//! Options arrive from the CLI/config-loading collaborator as string
//! pairs; [`Config::from_pairs`] validates them before any symbol
//! processing, so a bad option never reaches the pipeline.

use std::sync::Arc;

use crate::error::ConfigError;

/// Configuration for one documentation run.
///
/// `show_friends` defaults to whatever `show_private` is: enabling
/// private members without mentioning friends also reveals friend
/// declarations, since those usually appear under a `private:` label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Include private members. Default false.
    pub show_private: bool,
    /// Include protected members. Default true.
    show_protected: Option<bool>,
    /// Include friend relations. Default tracks `show_private`.
    show_friends: Option<bool>,
    /// Restrict processing to these top-level scopes, if set.
    pub root_filter: Option<Vec<Arc<str>>>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective `show_protected` value (default true).
    pub fn show_protected(&self) -> bool {
        self.show_protected.unwrap_or(true)
    }

    /// Effective `show_friends` value (default = `show_private`).
    pub fn show_friends(&self) -> bool {
        self.show_friends.unwrap_or(self.show_private)
    }

    pub fn with_show_private(mut self, value: bool) -> Self {
        self.show_private = value;
        self
    }

    pub fn with_show_protected(mut self, value: bool) -> Self {
        self.show_protected = Some(value);
        self
    }

    pub fn with_show_friends(mut self, value: bool) -> Self {
        self.show_friends = Some(value);
        self
    }

    pub fn with_root_filter(
        mut self,
        roots: impl IntoIterator<Item = impl Into<Arc<str>>>,
    ) -> Self {
        self.root_filter = Some(roots.into_iter().map(Into::into).collect());
        self
    }

    /// Whether a root namespace passes the root filter.
    pub fn root_allowed(&self, name: &str) -> bool {
        match &self.root_filter {
            Some(roots) => roots.iter().any(|r| r.as_ref() == name),
            None => true,
        }
    }

    /// Build a configuration from `(option, value)` string pairs.
    ///
    /// Recognized options: `show_private`, `show_protected`,
    /// `show_friends` (booleans, `true`/`false`), and `root_filter`
    /// (comma-separated top-level scope names). Anything else is a
    /// fatal [`ConfigError`].
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self, ConfigError>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref();
            match key {
                "show_private" => config.show_private = parse_bool(key, value)?,
                "show_protected" => config.show_protected = Some(parse_bool(key, value)?),
                "show_friends" => config.show_friends = Some(parse_bool(key, value)?),
                "root_filter" => {
                    config.root_filter = Some(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(Arc::from)
                            .collect(),
                    );
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }
        Ok(config)
    }
}

fn parse_bool(option: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            option: option.to_string(),
            value: value.to_string(),
        }),
    }
}
