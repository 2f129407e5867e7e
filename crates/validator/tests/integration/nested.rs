//! Integration test: nested records
//!
//! Recursion is gated by the `nested` marker and keeps inner field names.

use pretty_assertions::assert_eq;
use tagcheck::{ConfigError, Error, FailureKind, FieldKind, Record, ValidationError, validate};

use crate::fixtures::{App, Response, User, UserApp, UserResponses, UserTags};

#[test]
fn test_nested_valid() {
    let record = UserResponses {
        user: User::valid(),
        responses: Vec::new(),
    };
    assert_eq!(validate(&record), Ok(()));
}

#[test]
fn test_nested_rejections_keep_inner_names() {
    let record = UserResponses {
        user: User {
            phones: vec!["1234567890".into(), "9876543210".into()],
            ..User::valid()
        },
        responses: vec![Response {
            code: 999,
            body: String::new(),
        }],
    };

    let Err(Error::Rejected(errors)) = validate(&record) else {
        panic!("expected rejection");
    };
    assert_eq!(errors.len(), 2);
    assert!(errors.iter().all(|e| e.field == "phones"));
}

#[test]
fn test_record_without_marker_not_descended() {
    let record = UserTags {
        user: User {
            age: 99,
            ..User::valid()
        },
        tags: String::new(),
    };
    assert_eq!(validate(&record), Ok(()));
}

#[test]
fn test_nested_config_error_propagates() {
    let record = UserApp {
        user: User::valid(),
        app: App {
            name: "App1".into(),
            version: "qwert".into(),
        },
    };
    assert_eq!(
        validate(&record),
        Err(Error::Config(ConfigError::UnknownRule {
            kind: FieldKind::String,
            rule: "min".into(),
        }))
    );
}

#[derive(Record)]
pub struct Team {
    #[validate("len:3")]
    pub code: String,
    #[validate("nested")]
    pub members: Vec<User>,
    #[validate("nested")]
    pub lead: Option<Box<User>>,
}

#[test]
fn test_sequence_of_records() {
    let team = Team {
        code: "abc".into(),
        members: vec![
            User::valid(),
            User {
                age: 10,
                ..User::valid()
            },
            User {
                id: "x".into(),
                ..User::valid()
            },
        ],
        lead: None,
    };

    let Err(Error::Rejected(errors)) = validate(&team) else {
        panic!("expected rejection");
    };
    assert_eq!(errors.errors(), &[
        ValidationError::new(FailureKind::CantBeLess, "18").with_field("age"),
        ValidationError::new(FailureKind::LenNotEqual, "36").with_field("id"),
    ]);
}

#[test]
fn test_optional_boxed_record() {
    let team = Team {
        code: "abc".into(),
        members: Vec::new(),
        lead: Some(Box::new(User {
            age: 60,
            ..User::valid()
        })),
    };

    let Err(Error::Rejected(errors)) = validate(&team) else {
        panic!("expected rejection");
    };
    assert_eq!(errors.for_field("age").count(), 1);
}

#[test]
fn test_sequence_of_records_without_marker() {
    #[derive(Record)]
    struct Roster {
        #[validate("len:3")]
        pub members: Vec<User>,
    }

    let roster = Roster {
        members: vec![User::valid()],
    };
    assert_eq!(
        validate(&roster),
        Err(Error::Config(ConfigError::KindHasNoRules {
            kind: FieldKind::Record
        }))
    );
}
