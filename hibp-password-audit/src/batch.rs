use std::path::Path;

use hibp_range_client::BreachLookup;
use tracing::{debug, instrument, warn};

use crate::error::Error;
use crate::messages;
use crate::report::{ResultRecord, write_report};
use crate::strength::classify;

/// How a batch run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchOutcome {
    /// The input path was not an existing regular file; no report was written.
    FileNotFound,
    /// Every password was attempted and the report was written.
    Completed { records: Vec<ResultRecord>, failed: usize },
}

/// Looks up and classifies a single password.
pub async fn check_password<L: BreachLookup>(
    lookup: &L,
    password: &str,
) -> Result<ResultRecord, hibp_range_client::Error> {
    let leak_count = lookup.leak_count(password).await?;
    Ok(ResultRecord { password: password.to_string(), leak_count, strength: classify(password) })
}

/// Passwords from a file's text: one per line, trimmed, blank lines dropped.
///
/// Lines may end in LF, CRLF or a lone CR. Order and duplicates are preserved.
pub fn parse_passwords(text: &str) -> Vec<String> {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Checks every password in `path` and writes the report to `report_path`.
///
/// A failed lookup is printed and skipped; it never stops the batch. The
/// report is written once, after the last password, even if it ends up
/// holding only the header.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn process_file<L: BreachLookup>(
    lookup: &L,
    path: &Path,
    report_path: &Path,
) -> Result<BatchOutcome, Error> {
    if !path.is_file() {
        println!("{}", messages::FILE_NOT_FOUND);
        return Ok(BatchOutcome::FileNotFound);
    }

    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::ReadInput { path: path.to_path_buf(), source })?;
    let passwords = parse_passwords(&text);

    println!("{}", messages::batch_start(passwords.len()));

    let mut records = Vec::with_capacity(passwords.len());
    let mut failed = 0;

    for (idx, password) in passwords.iter().enumerate() {
        match check_password(lookup, password).await {
            Ok(record) => {
                println!("{}", messages::batch_result(&record));
                records.push(record);
            }
            Err(e) => {
                warn!(entry = idx + 1, error = %e, "lookup failed");
                println!("{}", messages::batch_failure(password, &e));
                failed += 1;
            }
        }
    }

    write_report(report_path, &records)?;
    debug!(written = records.len(), failed, "report written");
    println!("{}", messages::report_saved(report_path));

    Ok(BatchOutcome::Completed { records, failed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_passwords() {
        let text = "Password1@\n\nabc\r\n   \n  padded  \nabc\n";
        assert_eq!(parse_passwords(text), vec!["Password1@", "abc", "padded", "abc"]);
    }

    #[test]
    fn test_parse_passwords_cr_only() {
        assert_eq!(parse_passwords("first\rsecond\r"), vec!["first", "second"]);
        assert_eq!(parse_passwords("a\rb\r\nc\n"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_passwords_empty() {
        assert!(parse_passwords("").is_empty());
        assert!(parse_passwords("\n\r\n \t\n").is_empty());
    }
}
