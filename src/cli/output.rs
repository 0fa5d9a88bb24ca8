//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.  Only `success` and the
//! table/strength printers write to stdout; commands whose stdout is a
//! payload or mnemonic use `status` so the pipe stays clean.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::cipher::PayloadInfo;
use crate::crypto::PasswordStrength;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a green success message to stderr.
pub fn status(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    eprintln!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Render a four-segment strength bar, colored by score.
pub fn strength_bar(strength: &PasswordStrength) -> String {
    let filled = usize::from(strength.categories);
    let bar = format!("{}{}", "\u{25a0}".repeat(filled), "\u{25a1}".repeat(4 - filled));
    let styled = if strength.score <= 0.25 {
        style(bar).red()
    } else if strength.score <= 0.5 {
        style(bar).yellow()
    } else if strength.score <= 0.75 {
        style(bar).cyan()
    } else {
        style(bar).green()
    };
    format!("[{styled}] {:>3.0}%", strength.score * 100.0)
}

/// Print a strength rating: bar, feedback, verdict.
pub fn print_strength(strength: &PasswordStrength) {
    println!("{}  {}", strength_bar(strength), strength.feedback);
    if strength.is_strong {
        success("Meets the recommended strength (12+ characters, 3+ character types).");
    } else {
        warning("Below the recommended strength (12+ characters, 3+ character types).");
    }
}

/// Print payload metadata as a two-column table.
pub fn print_payload_info(info: &PayloadInfo) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field", "Value"]);

    table.add_row(vec!["Version".to_string(), info.version.clone()]);
    table.add_row(vec!["Algorithm".to_string(), info.algorithm.clone()]);
    table.add_row(vec!["Iterations".to_string(), info.iterations.to_string()]);
    table.add_row(vec![
        "Ciphertext".to_string(),
        format!("{} bytes", info.data_size),
    ]);

    println!("{table}");
}
