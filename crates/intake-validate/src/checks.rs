//! Built-in value checks for typed columns.
//!
//! Empty values are never type errors; required-ness is checked by the
//! engine before these run.

use chrono::NaiveDate;

use intake_model::ColumnType;

/// Date formats accepted for `ColumnType::Date` values.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%m/%d/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Checks a non-empty value against a column type. Returns the issue
/// message on failure.
pub fn check_type(column_type: ColumnType, value: &str) -> Option<&'static str> {
    match column_type {
        ColumnType::String => None,
        ColumnType::Number => {
            // Only finite literals count; "NaN" and "inf" parse as f64
            // but are not numbers a user meant to import
            if value.parse::<f64>().is_ok_and(f64::is_finite) {
                None
            } else {
                Some("Must be a number")
            }
        }
        ColumnType::Date => {
            if parses_as_date(value) {
                None
            } else {
                Some("Must be a valid date")
            }
        }
        ColumnType::Email => {
            if looks_like_email(value) {
                None
            } else {
                Some("Must be a valid email")
            }
        }
        ColumnType::Boolean => {
            if is_boolean_lexeme(value) {
                None
            } else {
                Some("Must be a boolean value")
            }
        }
    }
}

fn parses_as_date(value: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(value, format).is_ok())
}

/// Basic `local@domain.tld` shape check, no full RFC 5322 parsing.
fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

fn is_boolean_lexeme(value: &str) -> bool {
    matches!(
        value.to_lowercase().as_str(),
        "true" | "false" | "1" | "0" | "yes" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_check() {
        assert_eq!(check_type(ColumnType::Number, "42"), None);
        assert_eq!(check_type(ColumnType::Number, "-3.5"), None);
        assert_eq!(
            check_type(ColumnType::Number, "abc"),
            Some("Must be a number")
        );
    }

    #[test]
    fn number_check_rejects_non_finite_literals() {
        for value in ["NaN", "nan", "inf", "-inf", "infinity"] {
            assert_eq!(
                check_type(ColumnType::Number, value),
                Some("Must be a number"),
                "{value} should not validate as a number"
            );
        }
    }

    #[test]
    fn date_check_accepts_common_formats() {
        assert_eq!(check_type(ColumnType::Date, "2026-08-25"), None);
        assert_eq!(check_type(ColumnType::Date, "25/08/2026"), None);
        assert_eq!(
            check_type(ColumnType::Date, "not a date"),
            Some("Must be a valid date")
        );
        // Day 32 is not a calendar date in any accepted format
        assert_eq!(
            check_type(ColumnType::Date, "2026-01-32"),
            Some("Must be a valid date")
        );
    }

    #[test]
    fn email_check() {
        assert_eq!(check_type(ColumnType::Email, "a@b.co"), None);
        assert_eq!(
            check_type(ColumnType::Email, "missing-at.example"),
            Some("Must be a valid email")
        );
        assert_eq!(
            check_type(ColumnType::Email, "a@nodot"),
            Some("Must be a valid email")
        );
        assert_eq!(
            check_type(ColumnType::Email, "a b@c.d"),
            Some("Must be a valid email")
        );
    }

    #[test]
    fn boolean_check_is_case_insensitive() {
        for value in ["true", "FALSE", "Yes", "no", "1", "0"] {
            assert_eq!(check_type(ColumnType::Boolean, value), None);
        }
        assert_eq!(
            check_type(ColumnType::Boolean, "maybe"),
            Some("Must be a boolean value")
        );
    }

    #[test]
    fn string_columns_are_never_type_checked() {
        assert_eq!(check_type(ColumnType::String, "anything at all"), None);
    }
}
