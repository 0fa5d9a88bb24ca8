//! `seedseal audit` — display the audit log.
//!
//! Usage:
//!   seedseal audit               # show last 50 entries
//!   seedseal audit --last 20     # show last 20
//!   seedseal audit --since 7d    # entries from last 7 days

use chrono::{DateTime, Duration, Utc};

use crate::audit::{AuditEntry, AuditLog};
use crate::cli::{load_settings, output, Cli};
use crate::errors::{Result, SeedSealError};

/// Execute the `audit` command.
pub fn execute(cli: &Cli, last: usize, since: Option<&str>) -> Result<()> {
    let (project_dir, settings) = load_settings(cli)?;
    let audit_dir = settings.audit_path(&project_dir);

    if !AuditLog::db_path(&audit_dir).exists() {
        output::info("No audit entries found.");
        return Ok(());
    }

    let audit = AuditLog::open(&audit_dir)
        .ok_or_else(|| SeedSealError::AuditError("failed to open audit database".into()))?;

    let since_dt = since.map(parse_duration).transpose()?;
    let entries = audit.query(last, since_dt)?;

    if entries.is_empty() {
        output::info("No audit entries found.");
        return Ok(());
    }

    print_audit_table(&entries);

    Ok(())
}

/// Parse a lookback like "7d", "24h" or "30m" into the instant it points to.
fn parse_duration(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    let invalid = || {
        SeedSealError::CommandFailed(format!(
            "invalid duration '{input}' — use a whole number followed by d, h or m (e.g. 7d)"
        ))
    };

    let unit = input.chars().last().ok_or_else(invalid)?;
    let amount: i64 = input[..input.len() - unit.len_utf8()]
        .parse()
        .map_err(|_| invalid())?;
    if amount < 0 {
        return Err(invalid());
    }

    let span = match unit {
        'd' => Duration::try_days(amount),
        'h' => Duration::try_hours(amount),
        'm' => Duration::try_minutes(amount),
        _ => return Err(invalid()),
    }
    .ok_or_else(invalid)?;

    Utc::now().checked_sub_signed(span).ok_or_else(invalid)
}

/// Print audit entries in a formatted table.
pub fn print_audit_table(entries: &[AuditEntry]) {
    use comfy_table::{ContentArrangement, Table};
    use console::style;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Time", "Operation", "Details"]);

    for entry in entries {
        table.add_row(vec![
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            colorize_operation(&entry.operation, entry.details.as_deref()),
            entry.details.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    println!(
        "{}",
        style(format!("{} audit entries:", entries.len())).bold()
    );
    println!("{table}");
}

/// Colorize operation names for display; failed decrypts stand out in red.
fn colorize_operation(op: &str, details: Option<&str>) -> String {
    use console::style;

    match (op, details) {
        ("decrypt", Some("ok")) => style(op).green().to_string(),
        ("decrypt", _) => style(op).red().to_string(),
        ("encrypt", _) => style(op).blue().to_string(),
        ("inspect", _) => style(op).cyan().to_string(),
        _ => op.to_string(),
    }
}
