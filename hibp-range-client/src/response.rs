use crate::error::Error;

/// Scans a range response body for `suffix` and returns its count.
///
/// Lines are `SUFFIX:COUNT`, separated by LF or CRLF. The first line whose
/// suffix equals `suffix` wins; a body without one yields `0`. Every line up to
/// the match must split into exactly two fields on `:`, but only the matching
/// line's count is parsed.
pub fn find_suffix_count(body: &str, suffix: &str) -> Result<u64, Error> {
    for (idx, line) in body.lines().enumerate() {
        if line.is_empty() {
            continue;
        }

        let (line_suffix, count) = match line.split_once(':') {
            Some((line_suffix, count)) if !count.contains(':') => (line_suffix, count),
            _ => {
                return Err(Error::MalformedLine { line_number: idx + 1, line: line.to_string() });
            }
        };

        if line_suffix == suffix {
            let count = count.trim();
            return count.parse::<u64>().map_err(|source| Error::InvalidCount {
                line_number: idx + 1,
                count: count.to_string(),
                source,
            });
        }
    }

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUFFIX: &str = "C6008F9CAB4083784CBD1874F76618D2A97";

    #[test]
    fn test_match_returns_count() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\r\n\
                    C6008F9CAB4083784CBD1874F76618D2A97:2254650\r\n\
                    FFFF0C2B1A2E6B2D0E4AF8F9D8C3B1A2E6B:12\r\n";
        assert_eq!(find_suffix_count(body, SUFFIX).unwrap(), 2254650);
    }

    #[test]
    fn test_lf_only_body() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\nC6008F9CAB4083784CBD1874F76618D2A97:7";
        assert_eq!(find_suffix_count(body, SUFFIX).unwrap(), 7);
    }

    #[test]
    fn test_no_match_is_zero() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3\r\n";
        assert_eq!(find_suffix_count(body, SUFFIX).unwrap(), 0);
        assert_eq!(find_suffix_count("", SUFFIX).unwrap(), 0);
    }

    #[test]
    fn test_first_match_wins() {
        let body = format!("{SUFFIX}:1\r\n{SUFFIX}:2\r\n");
        assert_eq!(find_suffix_count(&body, SUFFIX).unwrap(), 1);
    }

    #[test]
    fn test_suffix_compare_is_exact() {
        let body = format!("{}:5\r\n", SUFFIX.to_lowercase());
        assert_eq!(find_suffix_count(&body, SUFFIX).unwrap(), 0);
    }

    #[test]
    fn test_padding_entry_reports_zero() {
        let body = format!("{SUFFIX}:0\r\n");
        assert_eq!(find_suffix_count(&body, SUFFIX).unwrap(), 0);
    }

    #[test]
    fn test_missing_colon() {
        let body = "003D68EB55068C33ACE09247EE4C639306B\r\n";
        let err = find_suffix_count(body, SUFFIX).unwrap_err();
        assert!(err.is_parse_error());
        assert!(matches!(err, Error::MalformedLine { line_number: 1, .. }));
    }

    #[test]
    fn test_extra_colon_is_malformed() {
        let body = "003D68EB55068C33ACE09247EE4C639306B:3:1\r\n";
        let err = find_suffix_count(body, SUFFIX).unwrap_err();
        assert!(matches!(err, Error::MalformedLine { line_number: 1, .. }));
    }

    #[test]
    fn test_bad_count_on_other_line_is_skipped() {
        let body = format!("003D68EB55068C33ACE09247EE4C639306B:x\r\n{SUFFIX}:5\r\n");
        assert_eq!(find_suffix_count(&body, SUFFIX).unwrap(), 5);
    }

    #[test]
    fn test_non_integer_count_on_match() {
        let body = format!("{SUFFIX}:lots\r\n");
        let err = find_suffix_count(&body, SUFFIX).unwrap_err();
        assert!(err.is_parse_error());
        assert!(matches!(err, Error::InvalidCount { line_number: 1, .. }));
    }

    #[test]
    fn test_malformed_line_after_match_is_ignored() {
        let body = format!("{SUFFIX}:9\r\ngarbage\r\n");
        assert_eq!(find_suffix_count(&body, SUFFIX).unwrap(), 9);
    }
}
