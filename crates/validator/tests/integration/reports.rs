//! Integration test: rendered and serialized reports

use pretty_assertions::assert_eq;
use serde_json::json;
use tagcheck::{Error, FailureKind, ValidationError, ValidationErrors, validate};

use crate::fixtures::{App, User, UserApp, UserRole};

fn rejected_user() -> User {
    User {
        age: 51,
        role: UserRole("guest".into()),
        phones: vec!["123".into()],
        ..User::valid()
    }
}

#[test]
fn test_rejection_display() {
    let err = validate(&rejected_user()).unwrap_err();

    insta::assert_snapshot!(err.to_string().trim_end(), @r"
    age: cannot be greater 50
    role: string is not in the list admin,stuff
    phones: length of the string not equal to 11
    ");
}

#[test]
fn test_config_display() {
    let record = UserApp {
        user: User::valid(),
        app: App {
            name: "App1".into(),
            version: "1.0.0".into(),
        },
    };
    let err = validate(&record).unwrap_err();

    assert!(err.is_config());
    insta::assert_snapshot!(err.to_string(), @"unknown rule 'min' for string fields");
}

#[test]
fn test_rejection_json() {
    let err = validate(&rejected_user()).unwrap_err();
    let errors = err.validation_errors().expect("rejection");

    assert_eq!(
        serde_json::to_value(errors).unwrap(),
        json!([
            { "field": "age", "kind": "cant_be_greater", "condition": "50" },
            { "field": "role", "kind": "str_not_in_list", "condition": "admin,stuff" },
            { "field": "phones", "kind": "len_not_equal", "condition": "11" },
        ])
    );
}

#[test]
fn test_report_queries() {
    let Err(Error::Rejected(errors)) = validate(&rejected_user()) else {
        panic!("expected rejection");
    };

    assert!(errors.has_errors());
    assert_eq!(errors.for_field("role").count(), 1);
    assert_eq!(errors.for_field("name").count(), 0);
    assert_eq!(
        errors.iter().map(|e| e.kind.as_str()).collect::<Vec<_>>(),
        vec!["cant_be_greater", "str_not_in_list", "len_not_equal"]
    );
}

#[test]
fn test_empty_report_is_success() {
    assert_eq!(ValidationErrors::new().into_result(), Ok(()));

    let single: ValidationErrors =
        vec![ValidationError::new(FailureKind::IntNotInList, "1,2").with_field("code")].into();
    insta::assert_snapshot!(single.to_string(), @"code: int is not in the list 1,2");
}
