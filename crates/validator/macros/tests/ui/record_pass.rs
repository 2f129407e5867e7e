use tagcheck::{Error, Record, validate};

struct Unchecked;

#[derive(Record)]
pub struct UserMeta {
    #[validate("len:3")]
    pub hash: String,
}

#[derive(Record)]
pub struct User {
    #[validate("len:36")]
    pub id: String,
    #[validate(rules = "min:18|max:50", name = "Age")]
    pub age: u8,
    #[validate("len:11")]
    pub phones: Vec<String>,
    #[validate("nested")]
    pub meta: UserMeta,
    #[validate("len:5")]
    pub nickname: Option<String>,
    #[validate("in:admin,stuff")]
    pub r#type: String,
    pub untagged: Unchecked,
    #[validate("len:1")]
    hidden: Unchecked,
}

#[derive(Record)]
pub struct Marker;

fn main() {
    let user = User {
        id: "0".repeat(36),
        age: 51,
        phones: vec!["79001234567".into()],
        meta: UserMeta { hash: "abc".into() },
        nickname: None,
        r#type: "admin".into(),
        untagged: Unchecked,
        hidden: Unchecked,
    };
    let _ = &user.hidden;

    match validate(&user) {
        Err(Error::Rejected(errors)) => assert_eq!(errors.len(), 1),
        other => panic!("unexpected {other:?}"),
    }
    assert!(validate(&Marker).is_ok());
}
