//! Template location resolution.
//!
//! Maps a template identifier to its base directory. The directory-backed
//! implementation searches project templates (`.gantry/templates/`) before
//! user templates (`~/.gantry/templates/`).

use std::path::{Path, PathBuf};

/// Resolves a template identifier to a base directory.
pub trait TemplateLocator {
    /// The directory holding the template's description and artifacts, if
    /// the identifier is known.
    fn locate(&self, id: &str) -> Option<PathBuf>;

    /// All known template identifiers, sorted.
    fn list(&self) -> Vec<String>;
}

/// Directory-backed locator searching roots in priority order.
#[derive(Debug, Clone)]
pub struct DirLocator {
    roots: Vec<PathBuf>,
}

impl DirLocator {
    /// Locator over explicit roots, earlier roots taking priority.
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Standard roots for a project: `.gantry/templates/` under the project
    /// root, then `~/.gantry/templates/`.
    pub fn discover(project_root: &Path) -> Self {
        let mut roots = vec![project_root.join(".gantry").join("templates")];
        if let Some(home) = dirs::home_dir() {
            roots.push(home.join(".gantry").join("templates"));
        }
        Self { roots }
    }
}

impl TemplateLocator for DirLocator {
    fn locate(&self, id: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(id))
            .find(|dir| dir.is_dir())
    }

    fn list(&self) -> Vec<String> {
        let mut ids = Vec::new();
        for root in &self.roots {
            let Ok(entries) = std::fs::read_dir(root) else {
                continue;
            };
            for entry in entries.flatten() {
                if !entry.path().is_dir() {
                    continue;
                }
                if let Some(name) = entry.file_name().to_str() {
                    if !ids.iter().any(|known| known == name) {
                        ids.push(name.to_string());
                    }
                }
            }
        }
        ids.sort();
        ids
    }
}
