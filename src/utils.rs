// utils.rs
use crate::error::AppError;
use tracing::warn;

/// Parses a whole number typed at a prompt. Surrounding whitespace and a
/// leading sign are accepted.
pub fn parse_number(input: &str, setting: &'static str) -> Result<i32, AppError> {
    input.trim().parse::<i32>().map_err(|_| {
        warn!(%setting, input, "Rejected non-numeric input");
        AppError::InvalidValue { setting }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("80", 80)]
    #[case("  22 ", 22)]
    #[case("-5", -5)]
    #[case("+7", 7)]
    #[case("150", 150)]
    fn accepts_integers(#[case] input: &str, #[case] expected: i32) {
        assert_eq!(parse_number(input, "brightness").unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("x")]
    #[case("4.5")]
    #[case("1 2")]
    #[case("99999999999")]
    fn rejects_everything_else(#[case] input: &str) {
        let err = parse_number(input, "temperature").unwrap_err();
        assert!(matches!(err, AppError::InvalidValue { setting: "temperature" }));
    }
}
