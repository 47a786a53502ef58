pub mod tracing;

use brisk_options::config::UiConfig;
use brisk_options::events::SettingsBus;
use brisk_options::gutter::GutterIconToggles;
use brisk_options::pages::HostServices;
use brisk_options::workspace::WorkspaceHost;

/// Workspace double that records analysis restart requests
#[derive(Debug, Default)]
pub struct RecordingWorkspace {
    pub projects: Vec<String>,
    pub restarted: Vec<String>,
}

impl WorkspaceHost for RecordingWorkspace {
    fn open_projects(&self) -> Vec<String> {
        self.projects.clone()
    }

    fn restart_analysis(&mut self, project: &str) {
        self.restarted.push(project.to_string());
    }
}

/// Everything a page needs, bundled for tests
pub struct TestHost {
    pub config: UiConfig,
    pub bus: SettingsBus,
    pub toggles: GutterIconToggles,
    pub workspace: RecordingWorkspace,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            config: UiConfig::default(),
            bus: SettingsBus::default(),
            toggles: GutterIconToggles::new(),
            workspace: RecordingWorkspace::default(),
        }
    }

    pub fn services(&mut self) -> HostServices<'_> {
        HostServices {
            config: &mut self.config,
            events: &self.bus,
            toggles: &mut self.toggles,
            workspace: &mut self.workspace,
        }
    }
}
