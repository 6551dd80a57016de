//! Property-based tests for hex color parsing
//!
//! Uses proptest to verify the accept/reject partition of the validator
//! and the formatting round-trip invariants.

use proptest::prelude::*;

use huekit_core::{ColorError, HexColor};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate well-formed `#rrggbb` strings in mixed case
fn valid_color_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#[0-9a-fA-F]{6}").expect("valid regex")
}

/// Generate strings that do not start with `#`
fn missing_hash_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[0-9a-zA-Z]{7}").expect("valid regex")
}

/// Generate `#`-prefixed strings whose length is not 7 bytes
fn bad_length_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("#[0-9a-fA-F]{0,12}")
        .expect("valid regex")
        .prop_filter("length must differ from 7", |s| s.len() != 7)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every `#` + six-hex-digit string parses
    #[test]
    fn well_formed_strings_accepted(input in valid_color_strategy()) {
        prop_assert!(HexColor::parse(&input).is_ok());
    }

    /// Parsing is case-insensitive: upper and lower spellings agree
    #[test]
    fn parse_ignores_case(input in valid_color_strategy()) {
        let lower = HexColor::parse(&input.to_lowercase()).unwrap();
        let upper = HexColor::parse(&input.to_uppercase()).unwrap();
        prop_assert_eq!(lower, upper);
    }

    /// Formatting an accepted value yields the lowercase spelling of the input
    #[test]
    fn display_normalizes_to_lowercase(input in valid_color_strategy()) {
        let color = HexColor::parse(&input).unwrap();
        prop_assert_eq!(color.to_string(), input.to_lowercase());
    }

    /// Display output always re-parses to the same value
    #[test]
    fn display_parse_roundtrip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = HexColor::rgb(r, g, b);
        let reparsed = HexColor::parse(&color.to_string()).unwrap();
        prop_assert_eq!(reparsed, color);
    }

    /// No `#` prefix is always a `MissingHash` rejection
    #[test]
    fn missing_hash_rejected(input in missing_hash_strategy()) {
        prop_assert_eq!(HexColor::parse(&input), Err(ColorError::MissingHash));
    }

    /// Wrong length is always a `BadLength` rejection carrying the length
    #[test]
    fn bad_length_rejected(input in bad_length_strategy()) {
        prop_assert_eq!(HexColor::parse(&input), Err(ColorError::BadLength(input.len())));
    }

    /// A single non-hex byte among the digits is always rejected
    #[test]
    fn non_hex_digit_rejected(
        prefix in prop::string::string_regex("[0-9a-f]{0,5}").expect("valid regex"),
        bad in prop::char::range('g', 'z'),
    ) {
        // Pad with zeros so the total is exactly six digits
        let fill = 5usize.saturating_sub(prefix.len());
        let input = format!("#{}{}{}", prefix, bad, "0".repeat(fill));
        prop_assert_eq!(input.len(), 7);
        let expected_pos = 1 + prefix.len();
        prop_assert_eq!(
            HexColor::parse(&input),
            Err(ColorError::InvalidDigit(expected_pos))
        );
    }

    /// Accepted values never carry channels outside u8 (vacuous by type,
    /// but serde must agree end to end)
    #[test]
    fn serde_roundtrip(input in valid_color_strategy()) {
        let color = HexColor::parse(&input).unwrap();
        let json = serde_json::to_string(&color).unwrap();
        let back: HexColor = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, color);
    }
}
