pub type CmdResult<T> = seqname::Result<(T, i32)>;

pub struct GlobalArgs {
    /// Print the JSON envelope instead of text lines.
    pub json: bool,
}

pub mod config;
pub mod rename;

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        crate::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (seqname::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Rename(args) => dispatch!(args, global, rename),
        crate::Commands::Config(args) => dispatch!(args, global, config),
    }
}
