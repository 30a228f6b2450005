//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a rendered JSON document, optionally re-indented.
pub fn document(doc: &str, pretty: bool) -> Result<()> {
    if pretty {
        let value: serde_json::Value = serde_json::from_str(doc)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", doc);
    }
    Ok(())
}
