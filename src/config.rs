use serde::{Deserialize, Serialize};
use std::path::Path;

/// UI configuration owned by the host and edited through the options pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub tabs: TabConfig,
}

/// Where the editor tab bar is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabPlacement {
    Top,
    Left,
    Bottom,
    Right,
    /// No tab bar at all
    Hidden,
}

impl TabPlacement {
    /// All placements, in the order the options page lists them
    pub fn all() -> [TabPlacement; 5] {
        [
            TabPlacement::Top,
            TabPlacement::Left,
            TabPlacement::Bottom,
            TabPlacement::Right,
            TabPlacement::Hidden,
        ]
    }

    /// Display label for dropdowns
    pub fn label(self) -> &'static str {
        match self {
            TabPlacement::Top => "Top",
            TabPlacement::Left => "Left",
            TabPlacement::Bottom => "Bottom",
            TabPlacement::Right => "Right",
            TabPlacement::Hidden => "None",
        }
    }
}

/// Which tab is closed first once the tab limit is reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabClosePolicy {
    /// Prefer closing tabs whose buffer has no unsaved edits
    NonModifiedFirst,
    LeastRecentlyUsed,
}

impl TabClosePolicy {
    pub fn all() -> [TabClosePolicy; 2] {
        [
            TabClosePolicy::NonModifiedFirst,
            TabClosePolicy::LeastRecentlyUsed,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            TabClosePolicy::NonModifiedFirst => "Close non-modified tabs first",
            TabClosePolicy::LeastRecentlyUsed => "Close least recently used tabs",
        }
    }
}

/// Which tab becomes active after the current one is closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabActivation {
    LeftNeighbor,
    MostRecentlyUsed,
}

impl TabActivation {
    pub fn all() -> [TabActivation; 2] {
        [TabActivation::LeftNeighbor, TabActivation::MostRecentlyUsed]
    }

    pub fn label(self) -> &'static str {
        match self {
            TabActivation::LeftNeighbor => "Activate left neighbor",
            TabActivation::MostRecentlyUsed => "Activate most recently used",
        }
    }
}

/// Editor tab behavior configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    /// Mark tabs with unsaved edits with an asterisk
    #[serde(default = "default_false")]
    pub mark_modified_with_asterisk: bool,

    /// Scroll the tab bar instead of wrapping it to multiple rows
    #[serde(default = "default_true")]
    pub scroll_tab_layout: bool,

    /// Show a close button on each tab
    #[serde(default = "default_true")]
    pub show_close_button: bool,

    #[serde(default = "default_tab_placement")]
    pub tab_placement: TabPlacement,

    /// Hide file extensions the editor recognizes from tab titles
    #[serde(default = "default_false")]
    pub hide_known_extensions: bool,

    #[serde(default = "default_close_policy")]
    pub close_policy: TabClosePolicy,

    #[serde(default = "default_activation")]
    pub activate_on_close: TabActivation,

    /// Maximum number of open tabs; must be positive
    #[serde(default = "default_tab_limit")]
    pub tab_limit: u32,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_tab_placement() -> TabPlacement {
    TabPlacement::Top
}

fn default_close_policy() -> TabClosePolicy {
    TabClosePolicy::LeastRecentlyUsed
}

fn default_activation() -> TabActivation {
    TabActivation::LeftNeighbor
}

fn default_tab_limit() -> u32 {
    10
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            mark_modified_with_asterisk: false,
            scroll_tab_layout: true,
            show_close_button: true,
            tab_placement: default_tab_placement(),
            hide_known_extensions: false,
            close_policy: default_close_policy(),
            activate_on_close: default_activation(),
            tab_limit: default_tab_limit(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tabs: TabConfig::default(),
        }
    }
}

impl UiConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: UiConfig =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        tracing::debug!("Loaded UI config from {}", path.as_ref().display());
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        tracing::debug!("Saved UI config to {}", path.as_ref().display());
        Ok(())
    }

    /// Validate field-level constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tabs.tab_limit == 0 {
            return Err(ConfigError::ValidationError(
                "tab_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UiConfig::default();
        assert!(!config.tabs.mark_modified_with_asterisk);
        assert!(config.tabs.scroll_tab_layout);
        assert!(config.tabs.show_close_button);
        assert_eq!(config.tabs.tab_placement, TabPlacement::Top);
        assert_eq!(config.tabs.tab_limit, 10);
    }

    #[test]
    fn test_config_validation() {
        let mut config = UiConfig::default();
        assert!(config.validate().is_ok());

        config.tabs.tab_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_save_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config_path = temp_dir.path().join("ui.json");

        let mut config = UiConfig::default();
        config.tabs.tab_placement = TabPlacement::Bottom;
        config.tabs.tab_limit = 25;
        config.save_to_file(&config_path).unwrap();

        let loaded = UiConfig::load_from_file(&config_path).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{
            "tabs": {
                "tab_placement": "hidden"
            }
        }"#;

        let config: UiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tabs.tab_placement, TabPlacement::Hidden);
        assert_eq!(config.tabs.tab_limit, 10);
        assert!(config.tabs.scroll_tab_layout);
    }

    #[test]
    fn test_placement_labels_cover_all() {
        for placement in TabPlacement::all() {
            assert!(!placement.label().is_empty());
        }
        assert_eq!(TabPlacement::Hidden.label(), "None");
    }
}
