//! End-to-end precondition chains through the public entry points.

use conditions::prelude::*;
use rstest::rstest;

#[rstest]
#[case(true)]
#[case(false)]
fn requires_classifies_booleans(#[case] value: bool) {
    assert_eq!(requires(value, "value").kind(), SubjectKind::Boolean);
}

#[rstest]
#[case(Subject::from(1234))]
#[case(Subject::from(7_589_724i64))]
#[case(Subject::from(787.3762))]
#[case(Subject::from(80_188.76))]
fn requires_classifies_numbers(#[case] value: Subject<'static>) {
    assert_eq!(requires(value, "value").kind(), SubjectKind::Number);
}

#[rstest]
#[case("test")]
#[case("this_is_my_value")]
fn requires_classifies_strings(#[case] value: &'static str) {
    assert_eq!(requires(value, "value").kind(), SubjectKind::String);
}

struct Settings {
    retries: i64,
}

#[test]
fn requires_classifies_arbitrary_objects() {
    let settings = Settings { retries: 3 };
    let validator = requires(Subject::object(&settings), "settings");
    assert_eq!(validator.kind(), SubjectKind::Object);
    let object = validator.into_object();
    object.is_of_type::<Settings>().unwrap();
    assert_eq!(object.get_value().downcast_ref::<Settings>().unwrap().retries, 3);
}

#[test]
fn boolean_chain() -> Result<(), ValidationError> {
    let flag = requires_bool(true, "flag");
    flag.is_true()?;
    assert!(*flag.get_value());
    Ok(())
}

#[test]
fn number_chain() -> Result<(), ValidationError> {
    let port = requires_num(8080, "port");
    port.is_positive()?
        .is_in_range(1, 65_535)?
        .is_not_equal_to(22)?
        .is_greater_or_equal(1024)?;
    Ok(())
}

#[test]
fn number_chain_stops_at_the_first_failure() {
    let port = requires_num(8080, "port");
    let err = port
        .is_positive()
        .and_then(|v| v.is_less_than(1024))
        .and_then(|v| v.is_not_equal_to(8080))
        .unwrap_err();
    // The less_than failure surfaces, not the equality one.
    assert_eq!(
        err.to_string(),
        "The argument `port` should be less than `1024`, but was `8080`"
    );
}

#[test]
fn string_chain() -> Result<(), ValidationError> {
    let id = requires_str("user-1234", "id");
    id.is_not_null_or_whitespace()?
        .starts_with("user-")?
        .is_longer_than(5)?
        .is_regex_match(r"^user-\d+$")?;
    Ok(())
}

#[test]
fn string_chain_reports_the_failing_argument() {
    let id = requires_str("user-", "id");
    let err = id
        .is_not_null_or_empty()
        .and_then(|v| v.is_regex_match(r"^user-\d+$"))
        .unwrap_err();
    assert_eq!(err.argument_name(), "id");
    assert_eq!(err.pattern(), Some(r"^user-\d+$"));
}

#[test]
fn set_membership_chain() -> Result<(), ValidationError> {
    let level = requires_str("INFO", "level");
    level
        .is_in_set_case_insensitive(&["trace", "debug", "info", "warn", "error"])?
        .is_not_in_set(&["off"])?;
    assert!(level.is_in_set(&["trace", "debug", "info"]).is_err());
    Ok(())
}

#[test]
fn object_chain() -> Result<(), ValidationError> {
    let settings = Settings { retries: 3 };
    let validator = requires_obj(&settings, "settings");
    validator
        .is_not_null()?
        .is_of_type::<Settings>()?
        .is_equal_to(&settings)?;
    Ok(())
}

#[test]
fn validator_value_is_untouched_by_a_long_chain() -> Result<(), ValidationError> {
    let subject = "1234";
    let validator = requires_str(subject, "subject");
    validator
        .is_not_null()?
        .is_shorter_than(5)?
        .has_length(4)?
        .contains("23")?;
    assert_eq!(*validator.get_value(), Some(subject));
    assert_eq!(*validator.get_value(), Some(subject));
    Ok(())
}
