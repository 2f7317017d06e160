// Copyright 2025 the Vista Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vista_settings --heading-base-level=0

//! Vista Settings: namespaced key/value settings for project source groups.
//!
//! Settings are stored in a flat [`ConfigStore`] under slash-separated keys.
//! Each source group owns the namespace
//! `source_groups/source_group_<id>/` and persists two string fields there:
//! `name` and `status`.
//!
//! ```rust
//! use vista_settings::{
//!     ConfigStore, MemoryConfig, SourceGroupKind, SourceGroupSettings, SourceGroupStatus,
//! };
//!
//! let mut config = MemoryConfig::new();
//!
//! let mut group = SourceGroupSettings::new("core", SourceGroupKind::CxxCdb);
//! group.set_name("Engine");
//! group.set_status(SourceGroupStatus::Disabled);
//! group.save(&mut config);
//!
//! assert_eq!(
//!     config.value("source_groups/source_group_core/status").as_deref(),
//!     Some("disabled")
//! );
//!
//! let mut loaded = SourceGroupSettings::new("core", SourceGroupKind::CxxCdb);
//! loaded.load(&config);
//! assert_eq!(loaded.name(), "Engine");
//! assert_eq!(loaded.status(), SourceGroupStatus::Disabled);
//! ```
//!
//! The store itself is a trait so hosts can back it with their own
//! persistence format; [`MemoryConfig`] is an ordered in-memory store.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod source_group;
mod store;

pub use source_group::{
    Language, ParseStatusError, SourceGroupKind, SourceGroupSettings, SourceGroupStatus,
};
pub use store::{ConfigStore, MemoryConfig};
