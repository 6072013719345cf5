use clap::{Parser, Subcommand};

use commands::GlobalArgs;

#[derive(Debug, Clone, Copy)]
enum ResponseMode {
    Json,
    Text,
}

mod commands;
mod output;
mod tty;

use commands::{config, rename};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "seqname")]
#[command(version = VERSION)]
#[command(about = "Rename the files of a directory to <prefix><N>")]
struct Cli {
    /// Print a JSON envelope instead of text lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename every regular file of a directory to <prefix><N>
    Rename(rename::RenameArgs),
    /// Manage seqname.json defaults
    Config(config::ConfigArgs),
}

fn response_mode(command: &Commands, global: &GlobalArgs) -> ResponseMode {
    match command {
        Commands::Rename(_) if !global.json => ResponseMode::Text,
        _ => ResponseMode::Json,
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let global = GlobalArgs { json: cli.json };

    // Bare `seqname` renames with the configured defaults.
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Rename(rename::RenameArgs::default()));

    let mode = response_mode(&command, &global);
    let (json_result, exit_code) = commands::run_json(command, &global);

    match mode {
        ResponseMode::Json => {
            if let Err(err) = output::print_json_result(json_result) {
                output::print_error_text(&err);
            }
        }
        ResponseMode::Text => {
            if let Err(err) = &json_result {
                output::print_error_text(err);
            }
        }
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
