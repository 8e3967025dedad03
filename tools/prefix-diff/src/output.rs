use serde::Serialize;
use std::fmt;

/// Output format selection for all subcommands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object on stdout.
    Json,
    /// Human-readable report on stdout.
    #[default]
    Human,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// Render a successful result.
///
/// - **Json**: a single JSON object, no extraneous text.
/// - **Human**: the value's `Display` form.
pub fn render<T: Serialize + fmt::Display>(
    format: OutputFormat,
    value: &T,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string(value),
        OutputFormat::Human => Ok(value.to_string()),
    }
}

/// Write a successful result to stdout.
pub fn emit<T: Serialize + fmt::Display>(
    format: OutputFormat,
    value: &T,
) -> Result<(), serde_json::Error> {
    let text = render(format, value)?;
    match format {
        OutputFormat::Json => println!("{text}"),
        OutputFormat::Human => print!("{text}"),
    }
    Ok(())
}

/// Render an error as a JSON object.
pub fn error_json(exit_code_num: u8, message: &str) -> serde_json::Value {
    serde_json::json!({
        "error": message,
        "exit_code": exit_code_num,
    })
}

/// Write an error to stdout (JSON mode) or stderr (human mode).
///
/// `exit_code_num` is the raw numeric exit code (1 or 2).
pub fn emit_error(format: OutputFormat, exit_code_num: u8, message: &str) {
    match format {
        OutputFormat::Json => {
            // JSON errors go to stdout so the caller always gets valid JSON on stdout.
            println!("{}", error_json(exit_code_num, message));
        }
        OutputFormat::Human => {
            eprintln!("error: {message}");
        }
    }
}
