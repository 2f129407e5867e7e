//! Basic usage example for tagcheck

use tagcheck::{Error, Record, validate};

#[derive(Record)]
pub struct Address {
    #[validate("len:6")]
    pub zip: String,
}

#[derive(Record)]
pub struct User {
    #[validate("len:36")]
    pub id: String,
    #[validate("min:18|max:50")]
    pub age: u32,
    #[validate(r"regexp:^\w+@\w+\.\w+$")]
    pub email: String,
    #[validate("len:11")]
    pub phones: Vec<String>,
    #[validate("nested")]
    pub address: Address,
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let user = User {
        id: "pD4tNeo-t0OGE_ooz3WqxAcyFeuF6AUk6mQf".into(),
        age: 51,
        email: "user@mail.com".into(),
        phones: vec!["79001234567".into(), "7900123456".into()],
        address: Address {
            zip: "12345".into(),
        },
    };

    match validate(&user) {
        Ok(()) => println!("✓ user is valid"),
        Err(Error::Rejected(errors)) => {
            println!("✗ user is invalid ({} errors):", errors.len());
            print!("{errors}");
        }
        Err(Error::Config(e)) => println!("✗ broken rule tag: {e}"),
    }
}
