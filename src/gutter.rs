//! Gutter icon providers and their per-icon enabled flags
//!
//! Plugins contribute gutter icons (breakpoints, git status, run markers)
//! to the registry at startup. The options page reads the registry to
//! build its checkbox list; the toggle store records which icons the user
//! has switched away from their default state.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Describes one toggleable gutter icon contributed by a plugin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GutterIcon {
    /// Stable identifier, used as the toggle store key
    pub id: String,
    /// User-facing name shown next to the checkbox
    pub name: String,
    /// One-cell glyph drawn in the gutter, if the provider has one
    pub symbol: Option<String>,
    /// Whether the icon is shown when the user has never toggled it
    pub enabled_by_default: bool,
    /// Sub-toggles; a provider with options is represented by them instead
    pub options: Vec<GutterIcon>,
}

impl GutterIcon {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: None,
            enabled_by_default: true,
            options: Vec::new(),
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    pub fn with_options(mut self, options: Vec<GutterIcon>) -> Self {
        self.options = options;
        self
    }

    pub fn disabled_by_default(mut self) -> Self {
        self.enabled_by_default = false;
        self
    }

    pub fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

/// A registered provider: the icon plus the plugin that contributed it
#[derive(Debug, Clone)]
pub struct ProviderEntry {
    pub plugin: String,
    pub icon: GutterIcon,
}

/// Registry of gutter icon providers, filled by the host at startup
///
/// Enumeration preserves registration order. Icons without a display name
/// are dropped at registration; the options page assumes every entry it
/// sees can be labeled.
#[derive(Debug, Clone, Default)]
pub struct GutterIconRegistry {
    entries: Vec<ProviderEntry>,
}

impl GutterIconRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an icon under the plugin that contributes it
    pub fn register(&mut self, plugin: impl Into<String>, icon: GutterIcon) {
        if icon.name.is_empty() {
            tracing::debug!("Skipping unnamed gutter icon {:?}", icon.id);
            return;
        }
        self.entries.push(ProviderEntry {
            plugin: plugin.into(),
            icon,
        });
    }

    pub fn entries(&self) -> &[ProviderEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-icon enabled flags, keyed by icon id
///
/// Only deviations from an icon's default are stored, so the persisted
/// form stays minimal and new defaults take effect for untouched icons.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GutterIconToggles {
    #[serde(default)]
    overrides: HashMap<String, bool>,
}

impl GutterIconToggles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the icon is currently enabled
    pub fn is_enabled(&self, icon: &GutterIcon) -> bool {
        self.overrides
            .get(&icon.id)
            .copied()
            .unwrap_or(icon.enabled_by_default)
    }

    /// Record the user's choice for an icon
    pub fn set_enabled(&mut self, icon: &GutterIcon, enabled: bool) {
        if enabled == icon.enabled_by_default {
            self.overrides.remove(&icon.id);
        } else {
            self.overrides.insert(icon.id.clone(), enabled);
        }
    }

    /// Forget all user choices
    pub fn clear(&mut self) {
        self.overrides.clear();
    }

    /// Number of icons toggled away from their default
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }
}
