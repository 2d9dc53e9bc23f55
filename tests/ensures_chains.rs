//! Postcondition chains: `ensures*` must behave exactly like `requires*`.

use conditions::prelude::*;
use pretty_assertions::assert_eq;

fn parse_port(raw: &str) -> Result<i64, ValidationError> {
    let input = ensures_str(raw, "raw");
    input.is_not_null_or_whitespace()?.is_regex_match(r"^\d+$")?;

    let port: i64 = raw.parse().unwrap_or_default();
    ensures_num(port, "port").is_in_range(1, 65_535)?;
    Ok(port)
}

#[test]
fn ensures_guards_a_returned_value() {
    assert_eq!(parse_port("8080").unwrap(), 8080);
    let err = parse_port("99999").unwrap_err();
    assert_eq!(
        err.to_string(),
        "The argument `port` is out of the range `1-65535`, was `99999`"
    );
}

#[test]
fn ensures_dispatch_matches_requires_dispatch() {
    assert_eq!(ensures(true, "v").kind(), requires(true, "v").kind());
    assert_eq!(ensures(5, "v").kind(), requires(5, "v").kind());
    assert_eq!(ensures(5.5, "v").kind(), requires(5.5, "v").kind());
    assert_eq!(ensures("s", "v").kind(), requires("s", "v").kind());
}

#[test]
fn ensures_raises_the_same_errors_as_requires() {
    let from_ensures = ensures_num(0, "n").is_positive().unwrap_err();
    let from_requires = requires_num(0, "n").is_positive().unwrap_err();
    assert_eq!(from_ensures, from_requires);
}

#[test]
fn ensures_bool_and_obj_variants() -> Result<(), ValidationError> {
    ensures_bool(true, "committed").is_true()?;

    let result = vec![1, 2, 3];
    ensures_obj(&result, "result")
        .is_not_null()?
        .is_of_type::<Vec<i32>>()?
        .is_equal_to_using_eq(&vec![1, 2, 3])?;
    Ok(())
}

#[test]
fn ensures_str_accepts_absent_values() {
    let missing = ensures_str(None, "maybe");
    assert!(missing.is_null().is_ok());
    assert!(missing.is_null_or_whitespace().is_ok());
    assert!(missing.is_not_null().is_err());
}
