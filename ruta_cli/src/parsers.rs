use std::time::Duration;

use jiff::SpanRelativeTo;

/// Accepts "30s", ISO 8601 ("PT1M") or a plain number of seconds.
fn parse_duration(input: &str) -> Option<jiff::SignedDuration> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Some(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Some(duration);
    }

    input
        .parse::<i64>()
        .ok()
        .map(jiff::SignedDuration::from_secs)
}

/// A request timeout must be strictly positive.
pub fn parse_timeout(input: &str) -> Result<Duration, String> {
    let duration = parse_duration(input.trim()).ok_or_else(|| String::from("Invalid duration"))?;

    if !duration.is_positive() {
        return Err(format!("Timeout must be greater than zero, got '{input}'"));
    }

    Ok(duration.unsigned_abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_timeout("PT1M").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_timeout("45").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_timeout("500ms").unwrap(), Duration::from_millis(500));
        assert!(parse_timeout("soon").is_err());
    }

    #[test]
    fn test_parse_timeout_rejects_zero_and_negative() {
        assert!(parse_timeout("0").is_err());
        assert!(parse_timeout("0s").is_err());
        assert!(parse_timeout("PT0S").is_err());
        assert!(parse_timeout("-5").is_err());
        assert!(parse_timeout("-30s").is_err());
    }
}
