use crate::evaluation::StudentId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub id: StudentId,
    pub name: String,
}

/// Display names for students; ids without a profile render as the id.
#[derive(Debug, Clone, Default)]
pub struct StudentDirectory {
    names: HashMap<StudentId, String>,
}

impl StudentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: StudentId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn display_name<'a>(&'a self, id: &'a StudentId) -> &'a str {
        self.names
            .get(id)
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| id.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<StudentProfile> for StudentDirectory {
    fn from_iter<I: IntoIterator<Item = StudentProfile>>(iter: I) -> Self {
        Self {
            names: iter
                .into_iter()
                .map(|profile| (profile.id, profile.name))
                .collect(),
        }
    }
}

impl Extend<(StudentId, String)> for StudentDirectory {
    fn extend<I: IntoIterator<Item = (StudentId, String)>>(&mut self, iter: I) {
        for (id, name) in iter {
            self.names.entry(id).or_insert(name);
        }
    }
}
