//! Gutter icons page
//!
//! Flattens the provider registry into one checkbox list. Providers
//! without options become rows directly; a provider with options is
//! replaced by them, appended after all direct rows. The first row of
//! each contributing plugin carries the plugin's name as a separator
//! caption. Applying the page rewrites the toggle store and asks the
//! host to re-run analysis for every open project.

use std::collections::HashSet;

use crate::controls::{CheckboxListState, CheckboxRow};
use crate::gutter::{GutterIcon, GutterIconRegistry};

use super::{HostServices, OptionsPage, PageError};

const PAGE_ID: &str = "editor.preferences.gutter-icons";

/// Icons shipped with the editor register under this plugin id
const CORE_PLUGIN: &str = "brisk-core";

fn separator_caption(plugin: &str) -> String {
    if plugin == CORE_PLUGIN {
        "Platform".to_string()
    } else {
        plugin.to_string()
    }
}

/// Settings page toggling gutter icon providers
#[derive(Debug, Clone)]
pub struct GutterIconsPage {
    /// Flattened descriptors, parallel to `list.rows`
    icons: Vec<GutterIcon>,
    pub list: CheckboxListState,
}

impl GutterIconsPage {
    /// Build the page from the live registry state
    pub fn new(registry: &GutterIconRegistry) -> Self {
        // Group registrations by plugin, keeping first-seen plugin order
        let mut plugins: Vec<&str> = Vec::new();
        for entry in registry.entries() {
            if !plugins.iter().any(|p| *p == entry.plugin) {
                plugins.push(&entry.plugin);
            }
        }

        // Providers with options dissolve into them, after all direct rows
        let mut flat: Vec<(String, GutterIcon)> = Vec::new();
        let mut deferred: Vec<(String, GutterIcon)> = Vec::new();
        for plugin in &plugins {
            for entry in registry.entries().iter().filter(|e| e.plugin == *plugin) {
                if entry.icon.has_options() {
                    for option in &entry.icon.options {
                        deferred.push((entry.plugin.clone(), option.clone()));
                    }
                } else {
                    flat.push((entry.plugin.clone(), entry.icon.clone()));
                }
            }
        }
        flat.extend(deferred);

        let mut seen: HashSet<&str> = HashSet::new();
        let rows = flat
            .iter()
            .map(|(plugin, icon)| {
                let mut row = CheckboxRow::new(icon.id.clone(), icon.name.clone());
                if let Some(symbol) = &icon.symbol {
                    row = row.with_symbol(symbol.clone());
                }
                if seen.insert(plugin.as_str()) {
                    row = row.with_separator(separator_caption(plugin));
                }
                row
            })
            .collect();

        Self {
            list: CheckboxListState::new(rows),
            icons: flat.into_iter().map(|(_, icon)| icon).collect(),
        }
    }

    /// The flattened descriptors, in row order
    pub fn icons(&self) -> &[GutterIcon] {
        &self.icons
    }
}

impl OptionsPage for GutterIconsPage {
    fn id(&self) -> &str {
        PAGE_ID
    }

    fn display_name(&self) -> &str {
        "Gutter Icons"
    }

    fn reset(&mut self, host: &HostServices<'_>) {
        for (icon, row) in self.icons.iter().zip(self.list.rows.iter_mut()) {
            row.checked = host.toggles.is_enabled(icon);
        }
    }

    fn is_modified(&self, host: &HostServices<'_>) -> bool {
        self.icons
            .iter()
            .zip(self.list.rows.iter())
            .any(|(icon, row)| row.checked != host.toggles.is_enabled(icon))
    }

    fn apply(&mut self, host: &mut HostServices<'_>) -> Result<(), PageError> {
        for (icon, row) in self.icons.iter().zip(self.list.rows.iter()) {
            host.toggles.set_enabled(icon, row.checked);
        }

        for project in host.workspace.open_projects() {
            tracing::debug!("Restarting analysis for {}", project);
            host.workspace.restart_analysis(&project);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use crate::events::SettingsBus;
    use crate::gutter::GutterIconToggles;
    use crate::workspace::WorkspaceHost;

    #[derive(Debug, Default)]
    struct RecordingWorkspace {
        projects: Vec<String>,
        restarted: Vec<String>,
    }

    impl WorkspaceHost for RecordingWorkspace {
        fn open_projects(&self) -> Vec<String> {
            self.projects.clone()
        }

        fn restart_analysis(&mut self, project: &str) {
            self.restarted.push(project.to_string());
        }
    }

    struct Fixture {
        config: UiConfig,
        bus: SettingsBus,
        toggles: GutterIconToggles,
        workspace: RecordingWorkspace,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                config: UiConfig::default(),
                bus: SettingsBus::default(),
                toggles: GutterIconToggles::new(),
                workspace: RecordingWorkspace::default(),
            }
        }

        fn host(&mut self) -> HostServices<'_> {
            HostServices {
                config: &mut self.config,
                events: &self.bus,
                toggles: &mut self.toggles,
                workspace: &mut self.workspace,
            }
        }
    }

    fn sample_registry() -> GutterIconRegistry {
        let mut registry = GutterIconRegistry::new();
        registry.register(
            "git",
            GutterIcon::new("git.changed", "Changed lines").with_symbol("│"),
        );
        registry.register(
            "debugger",
            GutterIcon::new("dbg", "Debugger").with_options(vec![
                GutterIcon::new("dbg.breakpoint", "Breakpoints").with_symbol("●"),
                GutterIcon::new("dbg.logpoint", "Logpoints"),
            ]),
        );
        registry
    }

    #[test]
    fn test_flatten_puts_options_after_direct_rows() {
        let page = GutterIconsPage::new(&sample_registry());

        let ids: Vec<&str> = page.icons().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["git.changed", "dbg.breakpoint", "dbg.logpoint"]);
        // The provider with options is itself absent
        assert!(page.list.row("dbg").is_none());
    }

    #[test]
    fn test_first_row_per_plugin_gets_separator() {
        let mut registry = GutterIconRegistry::new();
        registry.register("git", GutterIcon::new("git.changed", "Changed lines"));
        registry.register("git", GutterIcon::new("git.blame", "Blame"));

        let page = GutterIconsPage::new(&registry);
        assert_eq!(page.list.rows[0].separator.as_deref(), Some("git"));
        assert!(page.list.rows[1].separator.is_none());
    }

    #[test]
    fn test_interleaved_plugins_group_contiguously() {
        let mut registry = GutterIconRegistry::new();
        registry.register("git", GutterIcon::new("git.changed", "Changed lines"));
        registry.register("tests", GutterIcon::new("tests.run", "Run test"));
        registry.register("git", GutterIcon::new("git.blame", "Blame"));

        let page = GutterIconsPage::new(&registry);
        let ids: Vec<&str> = page.icons().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["git.changed", "git.blame", "tests.run"]);
        assert_eq!(page.list.rows[0].separator.as_deref(), Some("git"));
        assert_eq!(page.list.rows[2].separator.as_deref(), Some("tests"));
    }

    #[test]
    fn test_options_only_plugin_header_lands_on_first_option() {
        let mut registry = GutterIconRegistry::new();
        registry.register("git", GutterIcon::new("git.changed", "Changed lines"));
        registry.register(
            "debugger",
            GutterIcon::new("dbg", "Debugger")
                .with_options(vec![GutterIcon::new("dbg.breakpoint", "Breakpoints")]),
        );

        let page = GutterIconsPage::new(&registry);
        // Options sort to the end, so the debugger header follows git's rows
        assert_eq!(page.list.rows[1].id, "dbg.breakpoint");
        assert_eq!(page.list.rows[1].separator.as_deref(), Some("debugger"));
    }

    #[test]
    fn test_core_plugin_shows_as_platform() {
        let mut registry = GutterIconRegistry::new();
        registry.register(
            CORE_PLUGIN,
            GutterIcon::new("bookmarks", "Bookmarks").with_symbol("★"),
        );
        registry.register("git", GutterIcon::new("git.changed", "Changed lines"));

        let page = GutterIconsPage::new(&registry);
        assert_eq!(page.list.rows[0].separator.as_deref(), Some("Platform"));
        assert_eq!(page.list.rows[1].separator.as_deref(), Some("git"));
    }

    #[test]
    fn test_modified_tracks_any_row_and_clears_on_revert() {
        let mut fx = Fixture::new();
        let mut page = GutterIconsPage::new(&sample_registry());
        page.reset(&fx.host());

        assert!(!page.is_modified(&fx.host()));

        page.list.set_checked("dbg.logpoint", false);
        assert!(page.is_modified(&fx.host()));

        page.list.set_checked("dbg.logpoint", true);
        assert!(!page.is_modified(&fx.host()));
    }

    #[test]
    fn test_apply_writes_store_and_restarts_analysis() {
        let mut fx = Fixture::new();
        fx.workspace.projects = vec!["alpha".to_string(), "beta".to_string()];

        let mut page = GutterIconsPage::new(&sample_registry());
        page.reset(&fx.host());
        page.list.set_checked("git.changed", false);
        page.apply(&mut fx.host()).unwrap();

        let git_icon = GutterIcon::new("git.changed", "Changed lines");
        assert!(!fx.toggles.is_enabled(&git_icon));
        assert_eq!(fx.workspace.restarted, ["alpha", "beta"]);
        assert!(!page.is_modified(&fx.host()));
    }

    #[test]
    fn test_reset_respects_defaults_and_overrides() {
        let mut fx = Fixture::new();
        let registry = {
            let mut r = GutterIconRegistry::new();
            r.register(
                "tests",
                GutterIcon::new("tests.coverage", "Coverage").disabled_by_default(),
            );
            r.register("tests", GutterIcon::new("tests.run", "Run test"));
            r
        };

        let mut page = GutterIconsPage::new(&registry);
        page.reset(&fx.host());
        assert_eq!(page.list.is_checked("tests.coverage"), Some(false));
        assert_eq!(page.list.is_checked("tests.run"), Some(true));

        let coverage = GutterIcon::new("tests.coverage", "Coverage").disabled_by_default();
        fx.toggles.set_enabled(&coverage, true);
        page.reset(&fx.host());
        assert_eq!(page.list.is_checked("tests.coverage"), Some(true));
    }
}
