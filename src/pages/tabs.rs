//! Editor tab behavior page
//!
//! Binds the tab settings record to form controls. Applying the page
//! broadcasts a settings-changed event, but only when one of the fields
//! that affect tab bar layout actually changed; the close and activation
//! policies are copied without tripping that gate, and a tab limit that
//! does not parse to a positive number is discarded without complaint.

use crate::config::{TabActivation, TabClosePolicy, TabPlacement};
use crate::controls::{DropdownState, NumberFieldState, ToggleState};
use crate::events::names;

use super::{HostServices, OptionsPage, PageError};

const PAGE_ID: &str = "editor.preferences.tabs";

/// Settings page for editor tab behavior
#[derive(Debug, Clone)]
pub struct TabsPage {
    pub asterisk: ToggleState,
    pub scroll_layout: ToggleState,
    pub show_close: ToggleState,
    pub hide_extensions: ToggleState,
    pub placement: DropdownState,
    pub close_policy: DropdownState,
    pub activate_on_close: DropdownState,
    pub tab_limit: NumberFieldState,
}

impl TabsPage {
    pub fn new() -> Self {
        Self {
            asterisk: ToggleState::new(false, "Mark modified tabs with an asterisk"),
            scroll_layout: ToggleState::new(true, "Scroll tab layout"),
            show_close: ToggleState::new(true, "Show close button on tabs"),
            hide_extensions: ToggleState::new(false, "Hide known file extensions"),
            placement: DropdownState::new(
                TabPlacement::all()
                    .iter()
                    .map(|p| p.label().to_string())
                    .collect(),
                "Tab placement",
            ),
            close_policy: DropdownState::new(
                TabClosePolicy::all()
                    .iter()
                    .map(|p| p.label().to_string())
                    .collect(),
                "When the tab limit is reached",
            ),
            activate_on_close: DropdownState::new(
                TabActivation::all()
                    .iter()
                    .map(|p| p.label().to_string())
                    .collect(),
                "When the active tab is closed",
            ),
            tab_limit: NumberFieldState::new(10, "Tab limit"),
        }
    }

    fn selected_placement(&self) -> TabPlacement {
        TabPlacement::all()[self.placement.selected]
    }

    fn selected_close_policy(&self) -> TabClosePolicy {
        TabClosePolicy::all()[self.close_policy.selected]
    }

    fn selected_activation(&self) -> TabActivation {
        TabActivation::all()[self.activate_on_close.selected]
    }

    /// The limit field parsed into the stored type, if it parses at all
    fn entered_limit(&self) -> Option<u32> {
        self.tab_limit.parsed().and_then(|v| u32::try_from(v).ok())
    }
}

impl Default for TabsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsPage for TabsPage {
    fn id(&self) -> &str {
        PAGE_ID
    }

    fn display_name(&self) -> &str {
        "Editor Tabs"
    }

    fn reset(&mut self, host: &HostServices<'_>) {
        let tabs = &host.config.tabs;

        self.asterisk.checked = tabs.mark_modified_with_asterisk;
        self.scroll_layout.checked = tabs.scroll_tab_layout;
        self.show_close.checked = tabs.show_close_button;
        self.hide_extensions.checked = tabs.hide_known_extensions;

        self.placement.selected = TabPlacement::all()
            .iter()
            .position(|p| *p == tabs.tab_placement)
            .unwrap_or(0);
        self.close_policy.selected = TabClosePolicy::all()
            .iter()
            .position(|p| *p == tabs.close_policy)
            .unwrap_or(0);
        self.activate_on_close.selected = TabActivation::all()
            .iter()
            .position(|p| *p == tabs.activate_on_close)
            .unwrap_or(0);

        self.tab_limit.set_value(i64::from(tabs.tab_limit));
    }

    fn is_modified(&self, host: &HostServices<'_>) -> bool {
        let tabs = &host.config.tabs;

        let mut modified = self.asterisk.checked != tabs.mark_modified_with_asterisk;
        // A limit that does not parse compares as unmodified
        modified |= self
            .entered_limit()
            .map_or(false, |limit| limit != tabs.tab_limit);
        modified |= self.selected_placement() != tabs.tab_placement;
        modified |= self.hide_extensions.checked != tabs.hide_known_extensions;
        modified |= self.scroll_layout.checked != tabs.scroll_tab_layout;
        modified |= self.show_close.checked != tabs.show_close_button;
        modified |= self.selected_close_policy() != tabs.close_policy;
        modified |= self.selected_activation() != tabs.activate_on_close;
        modified
    }

    fn apply(&mut self, host: &mut HostServices<'_>) -> Result<(), PageError> {
        let tabs = &mut host.config.tabs;

        let mut changed = tabs.mark_modified_with_asterisk != self.asterisk.checked;
        tabs.mark_modified_with_asterisk = self.asterisk.checked;

        if tabs.scroll_tab_layout != self.scroll_layout.checked {
            changed = true;
        }
        tabs.scroll_tab_layout = self.scroll_layout.checked;

        if tabs.show_close_button != self.show_close.checked {
            changed = true;
        }
        tabs.show_close_button = self.show_close.checked;

        let placement = self.selected_placement();
        if tabs.tab_placement != placement {
            changed = true;
        }
        tabs.tab_placement = placement;

        if tabs.hide_known_extensions != self.hide_extensions.checked {
            changed = true;
        }
        tabs.hide_known_extensions = self.hide_extensions.checked;

        // Policies are outside the change-notification gate
        tabs.close_policy = self.selected_close_policy();
        tabs.activate_on_close = self.selected_activation();

        // Invalid or non-positive limit input keeps the previous value
        if let Some(limit) = self.entered_limit() {
            if limit > 0 && limit != tabs.tab_limit {
                tabs.tab_limit = limit;
                changed = true;
            }
        }

        if changed {
            tracing::debug!("Tab settings changed, notifying listeners");
            host.events.emit_simple(names::TABS_CHANGED);
        }
        Ok(())
    }
}
