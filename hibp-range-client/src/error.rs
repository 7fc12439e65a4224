#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed for prefix {prefix}: {source}")]
    HttpRequest {
        prefix: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} for prefix {prefix}")]
    HttpStatus { prefix: String, status: u16 },

    #[error("malformed range response at line {line_number}: {line:?}")]
    MalformedLine { line_number: usize, line: String },

    #[error("invalid count at line {line_number}: {count:?}")]
    InvalidCount {
        line_number: usize,
        count: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl Error {
    /// True when the service answered but the body could not be understood.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Error::MalformedLine { .. } | Error::InvalidCount { .. })
    }

    /// Status code of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
