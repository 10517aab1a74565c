//! Upload policies
//!
//! A policy says where an accepted upload lives and what may be accepted.
//! Policies are plain data: each use-case is a constructor returning a
//! configured [`UploadPolicy`], and the [`PolicyRegistry`] looks them up by
//! name.

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use crate::outcome::Outcome;
use crate::storage::upload::Upload;
use crate::storage::validation::validate_upload;

/// Name of the built-in CSV upload policy.
pub const USER_POLICY: &str = "user";

/// Destination folder and acceptance rules for one class of uploads.
///
/// The default value has no folder, no extension and a zero size limit, so
/// it rejects every upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadPolicy {
    pub name: String,
    pub destination_folder: Vec<String>,
    /// Extensions with their leading dot, e.g. `.csv`.
    pub permitted_extensions: BTreeSet<String>,
    pub max_size_bytes: u64,
}

impl UploadPolicy {
    /// Build a policy; extensions missing their leading dot get one.
    pub fn new<F, E>(
        name: &str,
        destination_folder: F,
        permitted_extensions: E,
        max_size_bytes: u64,
    ) -> Self
    where
        F: IntoIterator,
        F::Item: Into<String>,
        E: IntoIterator,
        E::Item: AsRef<str>,
    {
        Self {
            name: name.to_string(),
            destination_folder: destination_folder.into_iter().map(Into::into).collect(),
            permitted_extensions: permitted_extensions
                .into_iter()
                .map(|ext| normalize_extension(ext.as_ref()))
                .collect(),
            max_size_bytes,
        }
    }

    /// CSV uploads from users: `User/`, `.csv` only, at most 5 MiB.
    pub fn user() -> Self {
        Self::new(USER_POLICY, ["User"], [".csv"], 5 * 1024 * 1024)
    }

    /// Folder segments joined with the platform separator.
    pub fn relative_path(&self) -> PathBuf {
        self.destination_folder.iter().collect()
    }

    pub fn permits_extension(&self, extension: Option<&str>) -> bool {
        extension.is_some_and(|ext| self.permitted_extensions.contains(ext))
    }

    /// Check an upload against this policy, reporting every failed rule.
    pub fn validate(&self, upload: &Upload) -> Outcome<()> {
        validate_upload(upload, self)
    }
}

fn normalize_extension(extension: &str) -> String {
    if extension.starts_with('.') {
        extension.to_string()
    } else {
        format!(".{}", extension)
    }
}

/// Policies addressable by name.
#[derive(Debug, Clone)]
pub struct PolicyRegistry {
    policies: HashMap<String, UploadPolicy>,
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        let mut registry = Self {
            policies: HashMap::new(),
        };
        registry.register(UploadPolicy::user());
        registry
    }
}

impl PolicyRegistry {
    /// Add or replace a policy under its own name.
    pub fn register(&mut self, policy: UploadPolicy) {
        self.policies.insert(policy.name.clone(), policy);
    }

    pub fn get(&self, name: &str) -> Option<&UploadPolicy> {
        self.policies.get(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.policies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> impl Iterator<Item = &UploadPolicy> {
        self.policies.values()
    }
}
