//! Sequential renaming: bring every regular file of one directory to `<prefix><N>`.
//!
//! A pass lists the directory once, collects the numbers already used by
//! conforming names, then hands out the smallest free number to each
//! remaining file in listing order. Conforming names are never renamed.

mod apply;
mod exclusions;
mod pattern;
mod plan;

pub use apply::{apply_plan, rename_directory, RenameOptions, RenameOutcome, RenameReport};
pub use exclusions::Exclusions;
pub use pattern::{NamePattern, Suffix};
pub use plan::{
    existing_numbers, plan_entries, plan_renames, RenamePlan, RenameStep, SkipReason,
    SkippedEntry,
};
