//! Role Catalog — the static role → expected-skills table used to enrich prompts.
//!
//! Loaded once at startup (embedded `config/roles.json`, or an operator file via
//! `ROLE_PROFILES_PATH`) and shared read-only through `AppState`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod handlers;

const BUILTIN_ROLES: &str = include_str!("../../config/roles.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read role profiles from {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid role profiles JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Role at position {0} has an empty name")]
    EmptyName(usize),

    #[error("Duplicate role key '{0}'")]
    DuplicateRole(String),
}

/// Expected skills for one job role, in the order they are listed to the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    #[serde(default)]
    pub technical_skills: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
}

/// Display name and lookup key of a catalog role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleSummary {
    pub name: String,
    pub key: String,
}

#[derive(Debug, Deserialize)]
struct RoleDefinition {
    name: String,
    #[serde(flatten)]
    profile: RoleProfile,
}

#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleSummary>,
    profiles: HashMap<String, RoleProfile>,
    empty: RoleProfile,
}

/// Lowercases and replaces spaces with underscores: "Software Engineer" → "software_engineer".
pub fn normalize_role(role: &str) -> String {
    role.trim().to_lowercase().replace(' ', "_")
}

impl RoleCatalog {
    /// The 26 roles shipped with the service.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_ROLES)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<RoleDefinition> = serde_json::from_str(raw)?;

        let mut roles = Vec::with_capacity(definitions.len());
        let mut profiles = HashMap::with_capacity(definitions.len());

        for (index, def) in definitions.into_iter().enumerate() {
            let key = normalize_role(&def.name);
            if key.is_empty() {
                return Err(CatalogError::EmptyName(index));
            }
            if profiles.insert(key.clone(), def.profile).is_some() {
                return Err(CatalogError::DuplicateRole(key));
            }
            roles.push(RoleSummary {
                name: def.name.trim().to_string(),
                key,
            });
        }

        Ok(Self {
            roles,
            profiles,
            empty: RoleProfile::default(),
        })
    }

    /// Looks a role up by display name or key. Unknown roles get the empty
    /// profile; this never fails.
    pub fn profile(&self, role: &str) -> &RoleProfile {
        self.profiles
            .get(&normalize_role(role))
            .unwrap_or(&self.empty)
    }

    pub fn contains(&self, role: &str) -> bool {
        self.profiles.contains_key(&normalize_role(role))
    }

    /// Roles in declaration order.
    pub fn roles(&self) -> &[RoleSummary] {
        &self.roles
    }
}
