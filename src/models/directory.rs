use std::collections::BTreeMap;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Counselor,
    Teacher,
    Admin,
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Counselor => "counselor",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    pub fn from_label(label: &str) -> Option<Role> {
        match label {
            "student" => Some(Role::Student),
            "counselor" => Some(Role::Counselor),
            "teacher" => Some(Role::Teacher),
            "admin" => Some(Role::Admin),
            "unknown" => Some(Role::Unknown),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
pub struct DirectoryEntry {
    pub user: String,
    pub role: Role,
}

#[derive(Deserialize)]
struct DirectoryFile {
    users: Vec<DirectoryEntry>,
}

// What the screens get back when they ask who a requester is.
pub struct RoleInfo {
    pub present: bool,
    pub role: Role,
}

pub struct RoleDirectory {
    entries: BTreeMap<String, Role>,
}

impl RoleDirectory {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    pub fn from_entries(entries: Vec<DirectoryEntry>) -> Self {
        let mut directory = Self::new();
        for entry in entries {
            directory.assign(entry.user, entry.role);
        }
        directory
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read role directory '{}'", path))?;
        let file: DirectoryFile =
            serde_json::from_str(&raw).context("Failed to parse role directory")?;
        Ok(Self::from_entries(file.users))
    }

    pub fn assign(&mut self, user: String, role: Role) {
        self.entries.insert(user, role);
    }

    pub fn resolve(&self, user: &str) -> RoleInfo {
        match self.entries.get(user) {
            Some(role) => RoleInfo {
                present: true,
                role: *role,
            },
            None => RoleInfo {
                present: false,
                role: Role::Unknown,
            },
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &Role)> {
        self.entries.iter()
    }
}
