//! Workspace host abstraction
//!
//! The options pages never own projects or analysis; they ask the host to
//! re-run highlighting after gutter icon toggles change. The trait keeps
//! the pages testable with a recording double, the same way the editor
//! abstracts time and filesystem access.

/// Host-side view of open projects and their analysis pass
pub trait WorkspaceHost: std::fmt::Debug {
    /// Names of all currently open projects
    fn open_projects(&self) -> Vec<String>;

    /// Re-run the analysis/highlighting pass for one project
    fn restart_analysis(&mut self, project: &str);
}

/// Host with no project model; restart requests are dropped
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWorkspace;

impl WorkspaceHost for NullWorkspace {
    fn open_projects(&self) -> Vec<String> {
        Vec::new()
    }

    fn restart_analysis(&mut self, _project: &str) {}
}
