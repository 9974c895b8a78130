use proptest::prelude::*;
use shapegen::runtime::constrained::Constrained;
use shapegen_testing_fixtures::{
    Account, Pair, Profile, Settings, User,
    constraints::{Handle, Nickname, NicknameError},
    pair, user,
};
use std::error::Error as _;

fn nickname(s: &str) -> Nickname {
    Nickname::try_constrain(s.to_string()).unwrap()
}

#[test]
fn first_missing_member_in_declaration_order() {
    assert_eq!(Pair::builder().build(), Err(pair::ValidationFailure::MissingA));
    assert_eq!(
        Pair::builder().b("b".into()).build(),
        Err(pair::ValidationFailure::MissingA)
    );
    assert_eq!(
        Pair::builder().a("a".into()).build(),
        Err(pair::ValidationFailure::MissingB)
    );

    let pair = Pair::builder().b("b".into()).a("a".into()).build().unwrap();
    assert_eq!((pair.a.as_str(), pair.b.as_str()), ("a", "b"));
}

#[test]
fn missing_required_member_with_only_optionals_set() {
    let err = User::builder()
        .nickname(Some(nickname("neo")))
        .build()
        .unwrap_err();

    assert_eq!(err, user::ValidationFailure::MissingId);
    assert_eq!(
        err.to_string(),
        "`id` was not specified but it is required when building `User`"
    );
    assert!(err.source().is_none());
}

#[test]
fn optional_members_default_to_none() {
    let user = User::builder().id("u1".into()).build().unwrap();

    assert_eq!(
        user,
        User {
            id: "u1".into(),
            nickname: None,
            tags: None,
        }
    );
}

#[test]
fn setters_replace_previous_values() {
    let user = User::builder()
        .id("first".into())
        .tags(Some(vec!["a".into()]))
        .id("second".into())
        .tags(None)
        .build()
        .unwrap();

    assert_eq!(user.id, "second");
    assert_eq!(user.tags, None);
}

#[test]
fn record_without_failure_cases_builds_infallibly() {
    let profile: Profile = Profile::builder()
        .age(Some(42))
        .avatar(Some(vec![1, 2, 3]))
        .build();

    assert_eq!(profile.age, Some(42));
    assert_eq!(profile.nickname, None);
    assert_eq!(Profile::from(Profile::builder()), Profile::builder().build());
}

#[test]
fn records_convert_back_into_builders() {
    let original = User {
        id: "u1".into(),
        nickname: Some(nickname("neo")),
        tags: Some(vec!["x".into(), "y".into()]),
    };

    let builder = user::Builder::from(original.clone());
    assert_eq!(User::try_from(builder).unwrap(), original);
}

#[test]
fn constraint_failure_message_and_source() {
    let err = shapegen_testing_fixtures::decode::user_from_line("u1,").unwrap_err();

    assert_eq!(
        err.to_string(),
        "validation failure occurred building member `nickname` when building `User`"
    );
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), NicknameError::Length { len: 0 }.to_string());
}

#[test]
fn nested_records_and_required_constrained_members() {
    let owner = User::builder().id("u1".into()).build().unwrap();
    let handle = Handle::try_constrain("@neo".into()).unwrap();

    let account = Account::builder()
        .owner(Some(owner.clone()))
        .handle(handle.clone())
        .build()
        .unwrap();

    assert_eq!(account.handle, handle);
    assert_eq!(account.owner, Some(owner));
}

#[test]
fn keyword_members_are_escaped() {
    let settings = Settings::builder()
        .r#type(Some("dark".into()))
        .build_value(Some(true))
        .self_(Some(7))
        .build();

    assert_eq!(settings.r#type.as_deref(), Some("dark"));
    assert_eq!(settings.build, Some(true));
    assert_eq!(settings.self_, Some(7));
}

proptest! {
    #[test]
    fn build_is_total(a in proptest::option::of("[a-z]{0,8}"), b in proptest::option::of("[a-z]{0,8}")) {
        let mut builder = Pair::builder();
        if let Some(a) = a.clone() {
            builder = builder.a(a);
        }
        if let Some(b) = b.clone() {
            builder = builder.b(b);
        }

        match (a, b, builder.build()) {
            (Some(a), Some(b), Ok(pair)) => prop_assert_eq!((pair.a, pair.b), (a, b)),
            (None, _, Err(e)) => prop_assert_eq!(e, pair::ValidationFailure::MissingA),
            (Some(_), None, Err(e)) => prop_assert_eq!(e, pair::ValidationFailure::MissingB),
            (a, b, result) => prop_assert!(false, "unexpected {result:?} for {a:?} {b:?}"),
        }
    }

    #[test]
    fn valid_nicknames_always_build(name in "[a-z]{1,16}") {
        let user = User::builder()
            .id("u1".into())
            .nickname(Some(nickname(&name)))
            .build()
            .unwrap();

        let nick = user.nickname.unwrap();
        prop_assert_eq!(nick.as_str(), name.as_str());
    }
}
