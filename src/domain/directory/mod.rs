//! Directory records - read-only listings of employees and employee groups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{EmployeeId, ValidationError};

/// Dimension used to group employees for bulk assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupDimension {
    Position,
    Department,
    Course,
}

impl GroupDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupDimension::Position => "position",
            GroupDimension::Department => "department",
            GroupDimension::Course => "course",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            GroupDimension::Position => "positions",
            GroupDimension::Department => "departments",
            GroupDimension::Course => "courses",
        }
    }

    /// Noun used for the member count of a group.
    pub fn member_noun(&self) -> &'static str {
        match self {
            GroupDimension::Course => "enrolled",
            GroupDimension::Position | GroupDimension::Department => "members",
        }
    }
}

impl fmt::Display for GroupDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupDimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "position" => Ok(GroupDimension::Position),
            "department" => Ok(GroupDimension::Department),
            "course" => Ok(GroupDimension::Course),
            other => Err(ValidationError::unknown_value("dimension", other)),
        }
    }
}

/// A named group with its member (or enrollment) count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub id: String,
    pub name: String,
    pub member_count: u32,
}

impl GroupSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>, member_count: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            member_count,
        }
    }
}

/// One row of the employee listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    pub id: EmployeeId,
    pub name: String,
    pub department: Option<String>,
    pub position: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_dimensions() {
        assert_eq!("position".parse::<GroupDimension>().unwrap(), GroupDimension::Position);
        assert_eq!("Department".parse::<GroupDimension>().unwrap(), GroupDimension::Department);
        assert_eq!(" course ".parse::<GroupDimension>().unwrap(), GroupDimension::Course);
    }

    #[test]
    fn rejects_unknown_dimension() {
        assert!("team".parse::<GroupDimension>().is_err());
    }

    #[test]
    fn course_groups_count_enrollments() {
        assert_eq!(GroupDimension::Course.member_noun(), "enrolled");
        assert_eq!(GroupDimension::Department.plural(), "departments");
    }
}
