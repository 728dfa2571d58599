//! ListingHandler - read-only directory listings.
//!
//! Listings never touch workflow state and always fetch afresh.

use std::sync::Arc;

use tracing::instrument;

use crate::domain::directory::{EmployeeSummary, GroupDimension, GroupSummary};
use crate::ports::Directory;

/// A read-only listing: the employee directory or one grouping of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Employees,
    Groups(GroupDimension),
}

pub struct ListingHandler {
    directory: Arc<dyn Directory>,
}

impl ListingHandler {
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self { directory }
    }

    /// Fetches and formats one listing. Failures render a single diagnostic.
    #[instrument(skip_all, fields(listing = ?kind))]
    pub async fn handle(&self, kind: ListingKind) -> String {
        match kind {
            ListingKind::Employees => self.employees().await,
            ListingKind::Groups(dimension) => self.groups(dimension).await,
        }
    }

    async fn employees(&self) -> String {
        match self.directory.list_employees().await {
            Ok(employees) => render_employees(&employees),
            Err(err) => {
                tracing::warn!(error = %err, "employee listing failed");
                format!("Could not load employees: {}", err)
            }
        }
    }

    async fn groups(&self, dimension: GroupDimension) -> String {
        match self.directory.list_groups(dimension).await {
            Ok(groups) => render_groups(dimension, &groups),
            Err(err) => {
                tracing::warn!(error = %err, dimension = %dimension, "group listing failed");
                format!("Could not load {}: {}", dimension.plural(), err)
            }
        }
    }
}

fn render_employees(employees: &[EmployeeSummary]) -> String {
    if employees.is_empty() {
        return "No employees found.".to_string();
    }

    let lines: Vec<String> = employees
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let details: Vec<&str> = [e.department.as_deref(), e.position.as_deref()]
                .into_iter()
                .flatten()
                .collect();
            if details.is_empty() {
                format!("{}. {} [{}]", i + 1, e.name, e.id)
            } else {
                format!("{}. {} ({}) [{}]", i + 1, e.name, details.join(", "), e.id)
            }
        })
        .collect();

    format!("Employees ({}):\n{}", employees.len(), lines.join("\n"))
}

fn render_groups(dimension: GroupDimension, groups: &[GroupSummary]) -> String {
    if groups.is_empty() {
        return format!("No {} found.", dimension.plural());
    }

    let lines: Vec<String> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| {
            format!(
                "{}. {} - {} {}",
                i + 1,
                g.name,
                g.member_count,
                dimension.member_noun()
            )
        })
        .collect();

    let mut title = dimension.plural().to_string();
    if let Some(first) = title.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    format!("{} ({}):\n{}", title, groups.len(), lines.join("\n"))
}
