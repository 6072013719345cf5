use clap::Args;

use seqname::log_status;

use seqname::defaults;
use seqname::paths;
use seqname::sequence::{self, Exclusions, RenameOptions, RenameOutcome};

use crate::commands::{CmdResult, GlobalArgs};
use crate::output;

#[derive(Args, Default, Debug)]
pub struct RenameArgs {
    /// Directory whose files are renamed (default from config, else ".")
    pub directory: Option<String>,

    /// Prefix of the generated names (default from config, else "yoga_course_")
    #[arg(short, long)]
    pub prefix: Option<String>,

    /// File name or glob pattern to leave untouched (repeatable)
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Show the renames without performing them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(args: RenameArgs, global: &GlobalArgs) -> CmdResult<RenameOutcome> {
    let defaults = defaults::load_defaults();

    let directory = args.directory.unwrap_or(defaults.directory);
    let prefix = args.prefix.unwrap_or(defaults.prefix);
    let exclusions = Exclusions::new(defaults.exclude.into_iter().chain(args.exclude))
        .with_current_exe();

    let options = RenameOptions::new(prefix)
        .exclude(exclusions)
        .dry_run(args.dry_run);

    let path = paths::expand_user_path(&directory);
    let verb = if args.dry_run { "Would rename" } else { "Renamed" };
    let text = !global.json;

    let outcome = sequence::rename_directory(&path, &options, |step| {
        if !text {
            return;
        }
        let line = format!("{}: {} -> {}", verb, step.from, step.to);
        if let Err(err) = output::write_stdout_line(&line) {
            log_status!("rename", "{}", err.message);
        }
    })?;

    if text {
        if let RenameOutcome::DirectoryMissing { .. } = outcome {
            output::write_stdout_line(&format!("The repo {} does not exist.", directory))?;
        }
    }

    Ok((outcome, 0))
}
