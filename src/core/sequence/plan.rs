use serde::Serialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use super::exclusions::Exclusions;
use super::pattern::{NamePattern, Suffix};
use crate::error::Result;
use crate::utils::io::{self, DirEntry};

// ============================================================================
// Types
// ============================================================================

/// A single planned rename inside the target directory.
#[derive(Debug, Clone, Serialize)]
pub struct RenameStep {
    /// Original file name.
    pub from: String,
    /// Assigned file name, `<prefix><number>`.
    pub to: String,
    pub number: u64,
    #[serde(skip)]
    pub source: PathBuf,
    #[serde(skip)]
    pub target: PathBuf,
}

/// Why an entry was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    Excluded,
    NotAFile,
    AlreadyNamed,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: SkipReason,
}

/// Every rename a pass would perform, in listing order.
#[derive(Debug, Clone, Serialize)]
pub struct RenamePlan {
    pub directory: String,
    pub prefix: String,
    /// Suffixes already taken by conforming names before the pass.
    pub existing: Vec<u64>,
    pub steps: Vec<RenameStep>,
    pub skipped: Vec<SkippedEntry>,
}

// ============================================================================
// Planning
// ============================================================================

/// Numbers already used by entries named `<prefix><digits>`.
///
/// Every entry counts, directories included, since their names are just as
/// unavailable as a rename target.
pub fn existing_numbers(entries: &[DirEntry], pattern: &NamePattern) -> BTreeSet<u64> {
    entries
        .iter()
        .filter_map(|entry| match pattern.suffix(&entry.display_name())? {
            Suffix::Number(n) => Some(n),
            Suffix::TooLarge => None,
        })
        .collect()
}

/// Assign names from an already-read listing without touching the file system
/// beyond the regular-file check.
pub fn plan_entries(
    directory: &Path,
    entries: &[DirEntry],
    pattern: &NamePattern,
    exclusions: &Exclusions,
) -> RenamePlan {
    let mut taken = existing_numbers(entries, pattern);
    let existing: Vec<u64> = taken.iter().copied().collect();

    let mut steps = Vec::new();
    let mut skipped = Vec::new();
    let mut cursor: u64 = 0;

    for entry in entries {
        let name = entry.display_name();

        let reason = if exclusions.is_excluded(&name) {
            Some(SkipReason::Excluded)
        } else if !entry.path.is_file() {
            Some(SkipReason::NotAFile)
        } else if pattern.is_match(&name) {
            Some(SkipReason::AlreadyNamed)
        } else {
            None
        };

        if let Some(reason) = reason {
            skipped.push(SkippedEntry { name, reason });
            continue;
        }

        while taken.contains(&cursor) {
            cursor += 1;
        }

        let new_name = pattern.name_for(cursor);
        steps.push(RenameStep {
            from: name,
            target: directory.join(&new_name),
            to: new_name,
            number: cursor,
            source: entry.path.clone(),
        });
        taken.insert(cursor);
        cursor += 1;
    }

    RenamePlan {
        directory: directory.display().to_string(),
        prefix: pattern.prefix().to_string(),
        existing,
        steps,
        skipped,
    }
}

/// List `directory` once and plan the renames for it.
pub fn plan_renames(
    directory: &Path,
    pattern: &NamePattern,
    exclusions: &Exclusions,
) -> Result<RenamePlan> {
    let entries = io::list_dir(directory)?;
    Ok(plan_entries(directory, &entries, pattern, exclusions))
}

// ============================================================================
// Tests
// ============================================================================
