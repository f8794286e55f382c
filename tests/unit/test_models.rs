use verbump::models::version::{
    compare_versions, parse_version_components, Version, VersionError, VersionInput,
    VersionOrdering,
};

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn test_three_component_strings_round_trip() {
        for text in ["0.0.0", "1.2.3", "10.20.30", "2.5.10", "999.0.18446744073709551615"] {
            let version = Version::from_string(text).unwrap();
            assert_eq!(version.to_display_string(), text);
        }
    }

    #[test]
    fn test_short_strings_are_padded() {
        assert_eq!(parse_version_components("5").unwrap(), (5, 0, 0));
        assert_eq!(parse_version_components("5.6").unwrap(), (5, 6, 0));
        assert_eq!(parse_version_components("1.2.3").unwrap(), (1, 2, 3));
    }

    #[test]
    fn test_partially_numeric_string_is_rejected() {
        let err = parse_version_components("1.a.3").unwrap_err();
        assert!(matches!(err, VersionError::InvalidFormat(_)));
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_leading_zeros_are_accepted() {
        assert_eq!(Version::from_string("01.002.0").unwrap(), Version::new(1, 2, 0));
    }
}

#[cfg(test)]
mod compare_tests {
    use super::*;

    #[test]
    fn test_compare_examples() {
        assert_eq!(compare_versions((4, 2, 1), (2, 3, 4)).as_i8(), 1);
        assert_eq!(compare_versions((1, 0, 0), (1, 0, 0)).as_i8(), 0);
        assert_eq!(compare_versions((1, 2, 8), (2, 4, 5)).as_i8(), -1);
    }

    #[test]
    fn test_minor_and_patch_break_ties() {
        assert_eq!(compare_versions((1, 2, 0), (1, 1, 9)), VersionOrdering::Greater);
        assert_eq!(compare_versions((1, 1, 1), (1, 1, 2)), VersionOrdering::Less);
    }

    #[test]
    fn test_operators_follow_compare() {
        let low = Version::from_string("1.2.8").unwrap();
        let high = Version::from_string("2.4.5").unwrap();

        assert!(low < high);
        assert!(high > low);
        assert_ne!(low, high);
        assert_eq!(low, Version::new(1, 2, 8));
        assert_eq!(low.cmp(&high), std::cmp::Ordering::from(low.compare(&high)));
    }
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn test_all_construction_forms_are_equal() {
        let from_ints = Version::from_parts(1, Some(3), None);
        let from_tuple = Version::from_input(VersionInput::from((1, 3))).unwrap();
        let from_text = Version::from_input(VersionInput::from("1.3")).unwrap();

        assert_eq!(from_ints.as_tuple(), (1, 3, 0));
        assert_eq!(from_ints.compare(&from_tuple), VersionOrdering::Equal);
        assert_eq!(from_tuple.compare(&from_text), VersionOrdering::Equal);
    }

    #[test]
    fn test_unsupported_shapes_are_invalid_type() {
        let inputs = [
            serde_json::json!(2.5),
            serde_json::json!(false),
            serde_json::json!([1, 2, 3, 4]),
            serde_json::json!([]),
            serde_json::json!({"major": 1, "minor": 2}),
        ];
        for input in &inputs {
            assert!(
                matches!(Version::from_value(input), Err(VersionError::InvalidType(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_string_value_with_bad_format_is_invalid_format() {
        assert!(matches!(
            Version::from_value(&serde_json::json!("x.y.z")),
            Err(VersionError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_machine_string() {
        assert_eq!(Version::from_parts(1, Some(3), None).to_machine_string(), "Version(1, 3, 0)");
    }
}
