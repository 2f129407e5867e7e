//! Integration test: flat records
//!
//! Scalar and sequence fields, skipped fields, and configuration faults.

use pretty_assertions::assert_eq;
use rstest::rstest;
use tagcheck::{ConfigError, Error, FailureKind, FieldKind, Record, ValidationError, validate};

use crate::fixtures::{EmptyStruct, Product, RawMessage, Response, Token, User, UserRole};

fn rejections(result: Result<(), Error>) -> Vec<ValidationError> {
    match result {
        Err(Error::Rejected(errors)) => errors.into_iter().collect(),
        other => panic!("expected rejection, got {other:?}"),
    }
}

fn config(result: Result<(), Error>) -> ConfigError {
    match result {
        Err(Error::Config(error)) => error,
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_valid_user() {
    let user = User::valid();
    assert!(user.meta().is_empty());
    assert_eq!(validate(&user), Ok(()));
}

#[test]
fn test_search_regexp_accepts_other_domains() {
    let user = User {
        email: "User1@mail.dot".into(),
        age: 25,
        ..User::valid()
    };
    assert_eq!(validate(&user), Ok(()));
}

#[test]
fn test_age_above_max() {
    let user = User {
        age: 51,
        phones: Vec::new(),
        ..User::valid()
    };
    assert_eq!(rejections(validate(&user)), vec![
        ValidationError::new(FailureKind::CantBeGreater, "50").with_field("age")
    ]);
}

#[test]
fn test_phones_every_element_checked() {
    let user = User {
        phones: vec!["1234567890".into(), "9876543210".into()],
        ..User::valid()
    };
    let expected = ValidationError::new(FailureKind::LenNotEqual, "11").with_field("phones");
    assert_eq!(rejections(validate(&user)), vec![expected.clone(), expected]);
}

#[test]
fn test_no_short_circuit() {
    let user = User {
        id: "short".into(),
        age: 12,
        email: "not-an-email".into(),
        role: UserRole("guest".into()),
        phones: vec!["1".into()],
        ..User::valid()
    };
    let fields: Vec<_> = rejections(validate(&user))
        .into_iter()
        .map(|e| (e.field.into_owned(), e.kind))
        .collect();

    assert_eq!(fields, vec![
        ("id".to_owned(), FailureKind::LenNotEqual),
        ("age".to_owned(), FailureKind::CantBeLess),
        ("email".to_owned(), FailureKind::RegexpNotMatch),
        ("role".to_owned(), FailureKind::StrNotInList),
        ("phones".to_owned(), FailureKind::LenNotEqual),
    ]);
}

#[test]
fn test_every_failing_rule_of_a_field_reported() {
    #[derive(Record)]
    struct Voucher {
        #[validate("len:3|regexp:^x")]
        pub code: String,
    }

    let voucher = Voucher {
        code: "abcd".into(),
    };
    let errors = match validate(&voucher) {
        Err(Error::Rejected(errors)) => errors,
        other => panic!("expected rejection, got {other:?}"),
    };
    assert_eq!(errors.for_field("code").count(), 2);
    assert_eq!(
        errors.iter().map(|e| e.kind).collect::<Vec<_>>(),
        vec![FailureKind::LenNotEqual, FailureKind::RegexpNotMatch]
    );
}

#[test]
fn test_multibyte_length() {
    #[derive(Record)]
    struct Greeting {
        #[validate("len:14")]
        pub text: String,
    }

    let greeting = Greeting {
        text: "Мой милый дом!".into(),
    };
    assert_eq!(validate(&greeting), Ok(()));
}

#[rstest]
#[case(200, true)]
#[case(404, true)]
#[case(500, true)]
#[case(201, false)]
fn test_response_codes(#[case] code: i32, #[case] valid: bool) {
    let response = Response {
        code,
        body: String::new(),
    };
    assert_eq!(validate(&response).is_ok(), valid);
}

#[test]
fn test_float_min() {
    let product = Product {
        price: 0.5,
        name: "0123456789".into(),
    };
    assert_eq!(rejections(validate(&product)), vec![
        ValidationError::new(FailureKind::CantBeLess, "1").with_field("price")
    ]);
}

#[test]
fn test_untagged_and_empty_records() {
    let token = Token {
        header: vec![1],
        payload: Vec::new(),
        signature: vec![2, 3],
    };
    assert_eq!(validate(&token), Ok(()));
    assert_eq!(validate(&EmptyStruct), Ok(()));
}

#[test]
fn test_none_is_accepted() {
    assert_eq!(validate(&None::<User>), Ok(()));
    assert_eq!(validate(&Some(User::valid())), Ok(()));
}

#[test]
fn test_not_a_record() {
    assert_eq!(config(validate("test")), ConfigError::RequireStruct {
        kind: FieldKind::String
    });
    assert_eq!(config(validate(&42)), ConfigError::RequireStruct {
        kind: FieldKind::Int
    });
}

#[test]
fn test_private_field_never_checked() {
    #[derive(Record)]
    struct Hidden {
        #[validate("rule:cond")]
        field: String,
    }

    let hidden = Hidden {
        field: "qwert".into(),
    };
    assert!(!hidden.field.is_empty());
    assert_eq!(validate(&hidden), Ok(()));
}

#[test]
fn test_crate_visible_field_never_checked() {
    let user = User {
        meta: RawMessage(vec![0; 3]),
        ..User::valid()
    };
    assert_eq!(user.meta().len(), 3);
    assert_eq!(validate(&user), Ok(()));
}

#[test]
fn test_field_without_rules() {
    #[derive(Record)]
    struct Plain {
        pub field: String,
        #[validate("  ")]
        pub blank: String,
    }

    let plain = Plain {
        field: "qwert".into(),
        blank: String::new(),
    };
    assert_eq!(validate(&plain), Ok(()));
}

#[test]
fn test_malformed_rule() {
    #[derive(Record)]
    struct Bad {
        #[validate("rule:cond|rule")]
        pub field: String,
    }

    let bad = Bad {
        field: "qwert".into(),
    };
    assert_eq!(config(validate(&bad)), ConfigError::MalformedRule {
        rule: "rule".into()
    });
}

#[test]
fn test_empty_rule() {
    #[derive(Record)]
    struct Bad {
        #[validate("len:5||len:6")]
        pub field: String,
    }

    let bad = Bad {
        field: "qwert".into(),
    };
    assert!(matches!(
        config(validate(&bad)),
        ConfigError::EmptyRule { .. }
    ));
}

#[test]
fn test_unknown_rule() {
    #[derive(Record)]
    struct Bad {
        #[validate("rule:cond")]
        pub field: String,
    }

    let bad = Bad {
        field: "qwert".into(),
    };
    assert_eq!(config(validate(&bad)), ConfigError::UnknownRule {
        kind: FieldKind::String,
        rule: "rule".into(),
    });
}

#[test]
fn test_string_rule_on_int_sequence() {
    #[derive(Record)]
    struct Codes {
        #[validate("len:5")]
        pub codes: Vec<i32>,
    }

    let codes = Codes {
        codes: vec![1, 2, 3],
    };
    assert_eq!(config(validate(&codes)), ConfigError::UnknownRule {
        kind: FieldKind::Int,
        rule: "len".into(),
    });
}

#[test]
fn test_bad_condition() {
    #[derive(Record)]
    struct Bad {
        #[validate("len:cond")]
        pub field: String,
    }

    let bad = Bad {
        field: "qwert".into(),
    };
    assert_eq!(
        config(validate(&bad)),
        ConfigError::invalid_condition("len", "cond")
    );
}

#[test]
fn test_bool_has_no_rules() {
    #[derive(Record)]
    struct Flags {
        #[validate("in:true")]
        pub enabled: bool,
    }

    assert_eq!(config(validate(&Flags { enabled: true })), ConfigError::KindHasNoRules {
        kind: FieldKind::Bool
    });
}

#[test]
fn test_config_error_wins_over_rejections() {
    #[derive(Record)]
    struct Mixed {
        #[validate("max:1")]
        pub count: u32,
        #[validate("regexp:[")]
        pub pattern: String,
    }

    let mixed = Mixed {
        count: 5,
        pattern: String::new(),
    };
    assert!(matches!(
        config(validate(&mixed)),
        ConfigError::RegexCompile { .. }
    ));
}
