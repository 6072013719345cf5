mod response;

pub use response::*;

use seqname::{Error, Result};
use std::io::{self, Write};

/// Write one line to stdout, treating a closed pipe as success.
pub fn write_stdout_line(line: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = writeln!(handle, "{}", line) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        ));
    }
    Ok(())
}

/// Human-readable error report on stderr for text mode.
pub fn print_error_text(err: &Error) {
    for line in error_text_lines(err) {
        eprintln!("{}", line);
    }
}

fn error_text_lines(err: &Error) -> Vec<String> {
    let mut lines = vec![format!("error[{}]: {}", err.code.as_str(), err.message)];
    for key in ["problem", "error"] {
        if let Some(cause) = err.details.get(key).and_then(|v| v.as_str()) {
            lines.push(format!("  {}", cause));
        }
    }
    lines.extend(err.hints.iter().map(|hint| format!("hint: {}", hint.message)));
    lines
}
