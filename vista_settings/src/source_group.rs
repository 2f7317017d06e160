// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::store::ConfigStore;

/// Whether a source group takes part in indexing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SourceGroupStatus {
    /// The group is indexed.
    #[default]
    Enabled,
    /// The group is kept in the project but skipped.
    Disabled,
}

impl SourceGroupStatus {
    /// Returns the persisted spelling of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for SourceGroupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known [`SourceGroupStatus`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown source group status {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for SourceGroupStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enabled" => Ok(Self::Enabled),
            "disabled" => Ok(Self::Disabled),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// Language indexed by a source group.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    /// C.
    C,
    /// C++.
    Cpp,
    /// Java.
    Java,
    /// Python.
    Python,
    /// Decided by a user-provided indexer command.
    Custom,
}

/// How a source group finds its files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SourceGroupKind {
    /// Hand-picked C files.
    CEmpty,
    /// Hand-picked C++ files.
    CppEmpty,
    /// C/C++ files listed in a compilation database.
    CxxCdb,
    /// C/C++ files from a Visual Studio solution.
    CxxVs,
    /// Hand-picked Java files.
    JavaEmpty,
    /// Java files of a Maven project.
    JavaMaven,
    /// Java files of a Gradle project.
    JavaGradle,
    /// Hand-picked Python files.
    PythonEmpty,
    /// Files indexed by a custom command.
    CustomCommand,
}

impl SourceGroupKind {
    /// Name given to new groups of this kind.
    #[must_use]
    pub const fn default_name(self) -> &'static str {
        match self {
            Self::CEmpty => "C Source Group",
            Self::CppEmpty => "C++ Source Group",
            Self::CxxCdb => "C/C++ from Compilation Database",
            Self::CxxVs => "C/C++ from Visual Studio",
            Self::JavaEmpty => "Java Source Group",
            Self::JavaMaven => "Maven Source Group",
            Self::JavaGradle => "Gradle Source Group",
            Self::PythonEmpty => "Python Source Group",
            Self::CustomCommand => "Custom Command Source Group",
        }
    }

    /// Language indexed by groups of this kind.
    #[must_use]
    pub const fn language(self) -> Language {
        match self {
            Self::CEmpty => Language::C,
            Self::CppEmpty | Self::CxxCdb | Self::CxxVs => Language::Cpp,
            Self::JavaEmpty | Self::JavaMaven | Self::JavaGradle => Language::Java,
            Self::PythonEmpty => Language::Python,
            Self::CustomCommand => Language::Custom,
        }
    }
}

/// Persisted settings of one project source group.
///
/// A group is identified by its `id`. Its name and status are stored in a
/// [`ConfigStore`] under `source_groups/source_group_<id>/name` and
/// `.../status`; the kind is fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceGroupSettings {
    id: String,
    name: String,
    kind: SourceGroupKind,
    status: SourceGroupStatus,
}

impl SourceGroupSettings {
    /// Version of the persisted layout.
    pub const VERSION: u32 = 1;

    /// Prefix shared by the keys of all source groups.
    pub const KEY_PREFIX: &'static str = "source_groups/source_group_";

    /// Creates enabled settings named after `kind`.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: SourceGroupKind) -> Self {
        Self {
            id: id.into(),
            name: kind.default_name().to_string(),
            kind,
            status: SourceGroupStatus::default(),
        }
    }

    /// Reads name and status from `config`.
    ///
    /// An empty or missing name keeps the current one. A missing status means
    /// enabled; an unreadable one is logged and treated as enabled.
    pub fn load<C: ConfigStore + ?Sized>(&mut self, config: &C) {
        let name = config.value_or_default(&self.key("name"), "");
        if !name.is_empty() {
            self.name = name;
        }

        let status = config.value_or_default(
            &self.key("status"),
            SourceGroupStatus::Enabled.as_str(),
        );
        self.status = status.parse().unwrap_or_else(|err: ParseStatusError| {
            log::warn!("source group {:?}: {err}; treating as enabled", self.id);
            SourceGroupStatus::Enabled
        });
    }

    /// Writes status and name to `config`.
    pub fn save<C: ConfigStore + ?Sized>(&self, config: &mut C) {
        config.set_value(&self.key("status"), self.status.as_str());
        config.set_value(&self.key("name"), &self.name);
    }

    /// Returns `true` if both settings describe the same indexing input.
    ///
    /// Compares id, kind and status. The name is display-only and ignored.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        self.id == other.id && self.kind == other.kind && self.status == other.status
    }

    /// Returns the group id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Changes the group id, and with it the key namespace.
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the group kind.
    #[must_use]
    pub fn kind(&self) -> SourceGroupKind {
        self.kind
    }

    /// Returns the language indexed by this group.
    #[must_use]
    pub fn language(&self) -> Language {
        self.kind.language()
    }

    /// Returns the status.
    #[must_use]
    pub fn status(&self) -> SourceGroupStatus {
        self.status
    }

    /// Sets the status.
    pub fn set_status(&mut self, status: SourceGroupStatus) {
        self.status = status;
    }

    /// Returns the full store key of `field` for this group.
    #[must_use]
    pub fn key(&self, field: &str) -> String {
        format!("{}{}/{field}", Self::KEY_PREFIX, self.id)
    }
}
