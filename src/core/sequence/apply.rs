use serde::Serialize;
use std::fs;
use std::path::Path;

use super::exclusions::Exclusions;
use super::pattern::NamePattern;
use super::plan::{plan_renames, RenamePlan, RenameStep, SkippedEntry};
use crate::error::{Error, RenameFailedDetails, Result};

/// Explicit inputs of one renaming pass.
#[derive(Debug, Clone)]
pub struct RenameOptions {
    pub prefix: String,
    pub exclusions: Exclusions,
    /// Plan only; leave the directory untouched.
    pub dry_run: bool,
}

impl RenameOptions {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            exclusions: Exclusions::default(),
            dry_run: false,
        }
    }

    pub fn exclude(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RenameReport {
    pub directory: String,
    pub prefix: String,
    pub renamed: Vec<RenameStep>,
    pub skipped: Vec<SkippedEntry>,
    /// False for a dry run.
    pub applied: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RenameOutcome {
    DirectoryMissing { directory: String },
    Completed(RenameReport),
}

/// Perform the planned renames in order.
///
/// Stops at the first failure; renames already done stay done. A target that
/// appeared after planning is reported as a failure instead of being replaced.
pub fn apply_plan<F>(plan: &RenamePlan, mut on_renamed: F) -> Result<usize>
where
    F: FnMut(&RenameStep),
{
    for (completed, step) in plan.steps.iter().enumerate() {
        let failed = |error: String| {
            Error::rename_failed(RenameFailedDetails {
                from: step.from.clone(),
                to: step.to.clone(),
                error,
                completed,
            })
        };

        if fs::symlink_metadata(&step.target).is_ok() {
            return Err(failed(format!("{} already exists", step.target.display())));
        }

        fs::rename(&step.source, &step.target).map_err(|e| failed(e.to_string()))?;
        on_renamed(step);
    }

    Ok(plan.steps.len())
}

/// Rename every regular file in `directory` to `<prefix><N>`.
///
/// A missing directory is an outcome, not an error: nothing is touched.
/// `on_renamed` runs after each successful rename (or once per planned step
/// on a dry run).
pub fn rename_directory<F>(
    directory: &Path,
    options: &RenameOptions,
    mut on_renamed: F,
) -> Result<RenameOutcome>
where
    F: FnMut(&RenameStep),
{
    if !directory.is_dir() {
        return Ok(RenameOutcome::DirectoryMissing {
            directory: directory.display().to_string(),
        });
    }

    let pattern = NamePattern::new(&options.prefix)?;

    log_status!("rename", "Scanning {}", directory.display());
    let plan = plan_renames(directory, &pattern, &options.exclusions)?;

    if options.dry_run {
        plan.steps.iter().for_each(&mut on_renamed);
    } else {
        apply_plan(&plan, &mut on_renamed)?;
    }

    log_status!(
        "rename",
        "{} {} file(s), skipped {}",
        if options.dry_run { "Would rename" } else { "Renamed" },
        plan.steps.len(),
        plan.skipped.len()
    );

    Ok(RenameOutcome::Completed(RenameReport {
        directory: plan.directory,
        prefix: plan.prefix,
        renamed: plan.steps,
        skipped: plan.skipped,
        applied: !options.dry_run,
    }))
}
