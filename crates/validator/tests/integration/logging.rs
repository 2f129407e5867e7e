//! Integration test: validation under an installed tracing subscriber

use tagcheck::validate;
use tracing::Level;

use crate::fixtures::{User, UserResponses};

#[test]
fn test_validate_with_subscriber() {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_test_writer()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let record = UserResponses {
            user: User {
                age: 5,
                ..User::valid()
            },
            responses: Vec::new(),
        };
        assert!(validate(&record).unwrap_err().is_rejected());
        assert!(validate("not a record").unwrap_err().is_config());
    });
}
