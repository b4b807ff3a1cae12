//! End-to-end checks of the public guard surface: chaining with `?`, label
//! capture through the macros, error kind selection and display output.

use guardpost::{ensure_that, guard, require, Error};
use time::macros::date;

fn configure(name: Option<&str>, port: u16, replicas: Option<u32>) -> Result<(u16, u32), Error> {
    let _name = require::string::not_null_or_white_space(name, "name")?;
    let port = require::numeric::in_between(port, 1024, 49151, "port")?;
    let replicas = require::value::not_null_or_default(replicas, "replicas")?;

    Ok((port, replicas))
}

#[test]
fn valid_arguments_pass_through_unchanged() {
    assert_eq!(configure(Some("edge"), 8080, Some(3)).unwrap(), (8080, 3));
}

#[test]
fn the_first_violation_wins() {
    // every argument is bad; the checks run top to bottom and fail fast
    let err = configure(None, 99, Some(0)).unwrap_err();
    assert!(matches!(err, Error::NullArgument { parameter } if parameter == "name"));

    let err = configure(Some("edge"), 99, Some(0)).unwrap_err();
    assert!(matches!(err, Error::OutOfRange { parameter, .. } if parameter == "port"));

    let err = configure(Some("edge"), 8080, Some(0)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { parameter, .. } if parameter == "replicas"));
}

#[test]
fn guard_macro_captures_the_argument_expression() {
    let limit = 5000u32;
    let err = guard!(require::numeric::less_than, limit, 100).unwrap_err();
    assert_eq!(err.parameter(), Some("limit"));

    let validated = guard!(require::numeric::less_than, limit, 10_000).unwrap();
    assert_eq!(validated, 5000);
}

#[test]
fn ensure_that_captures_the_condition_text() {
    let err = ensure_that!(3u32, |n| *n > 10).unwrap_err();
    match err {
        Error::InvalidArgument { parameter, message } => {
            assert_eq!(parameter, "3u32");
            assert!(message.contains("> 10"), "message={message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn error_messages_name_the_parameter() {
    let err = require::string::not_null_or_empty(Some(""), "token").unwrap_err();
    assert_eq!(err.to_string(), "argument 'token' is invalid: must not be empty");

    let err = require::value::not_null::<u8>(None, "token").unwrap_err();
    assert_eq!(err.to_string(), "argument 'token' must not be null");
}

#[test]
fn calendar_dates_use_the_same_generic_comparisons() {
    let lo = date!(2024 - 01 - 01);
    let hi = date!(2024 - 12 - 31);

    let value = date!(2024 - 06 - 15);
    assert_eq!(require::numeric::in_between(value, lo, hi, "value").unwrap(), value);

    let err = require::numeric::in_between(date!(2025 - 01 - 01), lo, hi, "value").unwrap_err();
    assert!(matches!(err, Error::OutOfRange { .. }));

    assert!(require::numeric::greater_than(hi, lo, "value").is_ok());
}

#[test]
fn items_checks_consume_plain_collections() {
    let tags = vec![Some("alpha"), Some("beta")];
    assert!(require::sequence::items_not_null_or_white_space(tags, "tags").is_ok());

    let tags = vec![Some("alpha"), None];
    assert!(require::sequence::items_not_null_or_white_space(tags, "tags").is_err());
}

#[test]
fn guid_checks_accept_parsed_identifiers() {
    let id = uguid::guid!("7c9e6679-7425-40de-944b-e07fc1f90ae7");
    assert_eq!(require::guid::not_empty(id, "id").unwrap(), id);

    let err = require::guid::not_null_or_empty(None, "id").unwrap_err();
    assert!(matches!(err, Error::NullArgument { .. }));
}

#[test]
fn uri_kind_checks_work_on_parsed_uris() {
    let absolute: http::Uri = "https://example.org/health".parse().unwrap();
    let relative: http::Uri = "/health".parse().unwrap();

    assert!(require::uri::is_absolute(&absolute, "endpoint").is_ok());
    assert!(require::uri::is_absolute(&relative, "endpoint").is_err());
    assert!(require::uri::is_relative(&relative, "endpoint").is_ok());
}
