//! Settings-dialog pages
//!
//! Every page follows the same three-phase contract the dialog drives:
//! `reset` copies stored settings into the page's controls, `is_modified`
//! compares the controls against the store, and `apply` writes accepted
//! edits back. Shared state is threaded through [`HostServices`] rather
//! than reached through globals.

pub mod gutter_icons;
pub mod tabs;

pub use gutter_icons::GutterIconsPage;
pub use tabs::TabsPage;

use crate::config::UiConfig;
use crate::events::SettingsBus;
use crate::gutter::{GutterIconRegistry, GutterIconToggles};
use crate::workspace::WorkspaceHost;

/// Host-owned state the pages read and mutate
pub struct HostServices<'a> {
    pub config: &'a mut UiConfig,
    pub events: &'a SettingsBus,
    pub toggles: &'a mut GutterIconToggles,
    pub workspace: &'a mut dyn WorkspaceHost,
}

/// Error raised by a page's `apply`
#[derive(Debug)]
pub enum PageError {
    Validation(String),
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PageError::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for PageError {}

/// Contract between a settings page and the host dialog
pub trait OptionsPage {
    /// Stable identifier, used by the dialog to remember the open page
    fn id(&self) -> &str;

    /// Name shown in the dialog's page list
    fn display_name(&self) -> &str;

    /// Help topic anchor, if the page has documentation
    fn help_topic(&self) -> Option<&str> {
        None
    }

    /// Copy stored settings into the page's controls
    fn reset(&mut self, host: &HostServices<'_>);

    /// Whether any control differs from the stored settings
    fn is_modified(&self, host: &HostServices<'_>) -> bool;

    /// Write accepted edits back to the store
    fn apply(&mut self, host: &mut HostServices<'_>) -> Result<(), PageError>;

    /// Release page resources when the dialog closes
    fn dispose(&mut self) {}

    /// Prepare the page to highlight a search term; returns whether it can
    fn enable_search(&mut self, _term: &str) -> bool {
        false
    }
}

/// Build the standard pages in dialog order
pub fn standard_pages(registry: &GutterIconRegistry) -> Vec<Box<dyn OptionsPage>> {
    vec![
        Box::new(TabsPage::new()),
        Box::new(GutterIconsPage::new(registry)),
    ]
}
