//! Plan rendering
//!
//! What the driver prints once a command line is accepted: the watch list,
//! the command, and the restart policy handed to the supervisor.

use crate::config::OutputFormat;
use crate::options::ParsedOptions;

/// Render the plan in the requested format (no trailing newline)
pub fn render(options: &ParsedOptions, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render_text(options),
        OutputFormat::Json => render_json(options),
    }
}

/// Human-readable plan
pub fn render_text(options: &ParsedOptions) -> String {
    let command: Vec<String> = options.command().iter().map(|arg| quote(arg)).collect();

    [
        format!("Watching: {}", options.watches().join(", ")),
        format!("Command:  {}", command.join(" ")),
        format!("Signal:   {}", options.signal()),
        format!(
            "Policy:   wait={} group={} parallel={}",
            yes_no(options.wait()),
            yes_no(options.group()),
            yes_no(options.parallel())
        ),
    ]
    .join("\n")
}

/// Single-line JSON event
pub fn render_json(options: &ParsedOptions) -> String {
    serde_json::json!({
        "event": "plan",
        "watches": options.watches(),
        "command": options.command(),
        "wait": options.wait(),
        "group": options.group(),
        "parallel": options.parallel(),
        "signal": options.signal(),
    })
    .to_string()
}

fn quote(arg: &str) -> String {
    if arg.is_empty() || arg.contains(char::is_whitespace) {
        format!("{:?}", arg)
    } else {
        arg.to_string()
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
