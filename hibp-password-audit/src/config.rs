use std::path::PathBuf;

use hibp_range_client::{DEFAULT_API_URL, RangeClient};

use crate::report::DEFAULT_REPORT_PATH;

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the range API (without the `/range` path).
    pub api_url: String,
    /// Where the batch report is written.
    pub report_path: PathBuf,
    /// Ask the API for padded responses.
    pub padding: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            padding: false,
        }
    }
}

impl Config {
    pub fn range_client(&self) -> Result<RangeClient, hibp_range_client::Error> {
        Ok(RangeClient::with_base_url(&self.api_url)?.with_padding(self.padding))
    }
}

/// What the user asked to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    SinglePassword,
    PasswordFile,
}

impl Mode {
    /// Parses the answer to the mode prompt; `None` for anything but exactly `1` or `2`.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Mode::SinglePassword),
            "2" => Some(Mode::PasswordFile),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse("1"), Some(Mode::SinglePassword));
        assert_eq!(Mode::parse("2"), Some(Mode::PasswordFile));
        assert_eq!(Mode::parse(" 1"), None);
        assert_eq!(Mode::parse("2 "), None);
        assert_eq!(Mode::parse("3"), None);
        assert_eq!(Mode::parse(""), None);
        assert_eq!(Mode::parse("12"), None);
        assert_eq!(Mode::parse("um"), None);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, "https://api.pwnedpasswords.com");
        assert_eq!(config.report_path, PathBuf::from("relatorio.csv"));
        assert!(!config.padding);
    }

    #[test]
    fn test_range_client_from_config() {
        let config = Config { api_url: "http://127.0.0.1:9/".into(), ..Config::default() };
        let client = config.range_client().unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9");
    }
}
