use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{DatabaseError, DatabaseResult};

/// 2-3 ASCII digits, a hyphen, then 7-8 ASCII digits. Searched within the value, `39-44-5323523`
/// passes. `\d` would also match other Unicode decimal digits.
static PHONE_NUMBER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[0-9]{2,3}-[0-9]{7,8}").expect("valid phone number regex"));

/// Runs the person rules in order and reports the first one that fails
pub fn validate_person(name: Option<&str>, number: Option<&str>) -> DatabaseResult<()> {
    validate_name(name)?;
    validate_number(number)
}

pub fn validate_name(name: Option<&str>) -> DatabaseResult<()> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(()),
        _ => Err(DatabaseError::Validation("name is missing".to_string())),
    }
}

pub fn validate_number(number: Option<&str>) -> DatabaseResult<()> {
    let number = match number {
        Some(number) if !number.trim().is_empty() => number,
        _ => return Err(DatabaseError::Validation("number is missing".to_string())),
    };

    if !PHONE_NUMBER_RE.is_match(number) {
        return Err(DatabaseError::Validation(format!(
            "number '{}' is not a valid phone number, expected a format like 040-1234567",
            number
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("040-1234567")]
    #[case("09-12345678")]
    #[case("123-1234567")]
    #[case("39-44-5323523")]
    #[case("12-43-2343456")]
    fn accepts_phone_numbers(#[case] number: &str) {
        assert_eq!(validate_person(Some("Ada Lovelace"), Some(number)), Ok(()));
    }

    #[rstest]
    #[case("040-123456")]
    #[case("1-1234567")]
    #[case("0401234567")]
    #[case("abc-defghij")]
    #[case("12-43-234345")]
    #[case("٠٤٠-١٢٣٤٥٦٧")]
    #[case("０４０-１２３４５６７")]
    #[case("04٠-123456٧")]
    fn rejects_malformed_numbers(#[case] number: &str) {
        let err = validate_number(Some(number)).err().expect("should error");

        assert!(matches!(err, DatabaseError::Validation(ref m) if m.contains(number)));
    }

    #[rstest]
    #[case(None, Some("040-1234567"), "name is missing")]
    #[case(Some(""), Some("040-1234567"), "name is missing")]
    #[case(Some("   "), Some("040-1234567"), "name is missing")]
    #[case(Some("Ada Lovelace"), None, "number is missing")]
    #[case(Some("Ada Lovelace"), Some(""), "number is missing")]
    #[case(None, None, "name is missing")]
    fn reports_the_first_failing_rule(
        #[case] name: Option<&str>,
        #[case] number: Option<&str>,
        #[case] message: &str,
    ) {
        assert_eq!(
            validate_person(name, number),
            Err(DatabaseError::Validation(message.to_string()))
        );
    }
}
