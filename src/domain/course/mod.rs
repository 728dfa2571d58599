//! Course content records produced by generation and publishing.

use serde::{Deserialize, Serialize};

/// Outline of one generated module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOutline {
    pub title: String,
    #[serde(default)]
    pub section_count: u32,
}

/// Module structure of a generated course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseStructure {
    #[serde(default)]
    pub modules: Vec<ModuleOutline>,
}

impl CourseStructure {
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn section_count(&self) -> u32 {
        self.modules.iter().map(|m| m.section_count).sum()
    }

    /// Renders the modules as a numbered list, one per line.
    pub fn render_outline(&self) -> String {
        self.modules
            .iter()
            .enumerate()
            .map(|(i, m)| {
                let noun = if m.section_count == 1 { "section" } else { "sections" };
                format!("{}. {} ({} {})", i + 1, m.title, m.section_count, noun)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
