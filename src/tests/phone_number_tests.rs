use crate::{CountryRecord, DEFAULT_REGISTRY, NumberValidationError, PhoneNumber};

#[test]
fn complete_number_joins_code_and_national_number() {
    let gb = DEFAULT_REGISTRY.find_by_iso("GB").unwrap();
    let number = PhoneNumber::new(gb, "2071838750");
    assert_eq!(number.country_iso_code(), "GB");
    assert_eq!(number.country_code(), "+44");
    assert_eq!(number.complete_number(), "+442071838750");
    assert_eq!(number.to_string(), "+442071838750");
}

#[test]
fn region_code_is_part_of_country_code() {
    let jersey = CountryRecord::new("JE", "Jersey", "44", "1534", 6, 6);
    assert_eq!(PhoneNumber::new(&jersey, "123456").country_code(), "+441534");
}

#[test]
fn from_complete_number_splits_by_calling_code() {
    let number = PhoneNumber::from_complete_number(&DEFAULT_REGISTRY, "+14155552671");
    assert_eq!(number.country_iso_code(), "US");
    assert_eq!(number.national_number(), "4155552671");

    let number = PhoneNumber::from_complete_number(&DEFAULT_REGISTRY, "+8613812345678");
    assert_eq!(number.country_iso_code(), "CN");
    assert_eq!(number.national_number(), "13812345678");
}

#[test]
fn is_valid_number_reports_the_failed_rule() {
    let us = DEFAULT_REGISTRY.find_by_iso("US").unwrap();
    assert_eq!(PhoneNumber::new(us, "4155552671").is_valid_number(&DEFAULT_REGISTRY), Ok(()));
    assert_eq!(
        PhoneNumber::new(us, "415555267").is_valid_number(&DEFAULT_REGISTRY),
        Err(NumberValidationError::TooShort)
    );
    assert_eq!(
        PhoneNumber::new(us, "41555526711").is_valid_number(&DEFAULT_REGISTRY),
        Err(NumberValidationError::TooLong)
    );
    assert_eq!(
        PhoneNumber::new(us, "415-555-2671").is_valid_number(&DEFAULT_REGISTRY),
        Err(NumberValidationError::InvalidCharacters)
    );
}
