//! Lenient boolean parsing for command-line values.

/// Parse a yes/no style flag value.
///
/// Accepts `yes`, `true`, `t`, `y`, `1` and `no`, `false`, `f`, `n`, `0`
/// in any letter case. Surrounding whitespace is not stripped. Used as a clap value parser, so the error string is
/// shown to the user as-is.
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value.to_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err(format!("Boolean value expected, got '{}'", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_truthy_spellings() {
        for value in ["yes", "true", "t", "y", "1", "YES", "True", "T", "Y"] {
            assert_eq!(parse_bool(value), Ok(true), "{value}");
        }
    }

    #[test]
    fn accepts_falsy_spellings() {
        for value in ["no", "false", "f", "n", "0", "NO", "False", "F", "N"] {
            assert_eq!(parse_bool(value), Ok(false), "{value}");
        }
    }

    #[test]
    fn rejects_anything_else() {
        for value in ["maybe", "", "2", "on", "off", "tru"] {
            let err = parse_bool(value).unwrap_err();
            assert!(err.contains("Boolean value expected"));
        }
    }

    #[test]
    fn rejects_padded_values() {
        for value in [" yes ", "no ", "\t1"] {
            assert!(parse_bool(value).is_err(), "{value:?}");
        }
    }
}
