use mindora_api::error::ApiError;
use mindora_api::usecase::register::{
    RegisterClientUseCase, RegisterInput, RegisterTherapistInput, RegisterTherapistUseCase,
};
use mindora_domain::role::AccountRole;

use crate::helpers::MemoryStore;

fn input(email: &str) -> RegisterInput {
    RegisterInput {
        email: email.to_owned(),
        username: None,
        password: "p1".to_owned(),
        password_confirm: "p1".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
    }
}

fn client_usecase(store: &MemoryStore) -> RegisterClientUseCase<MemoryStore, MemoryStore, MemoryStore> {
    RegisterClientUseCase {
        users: store.clone(),
        registrations: store.clone(),
        tokens: store.clone(),
    }
}

fn therapist_usecase(
    store: &MemoryStore,
) -> RegisterTherapistUseCase<MemoryStore, MemoryStore, MemoryStore> {
    RegisterTherapistUseCase {
        users: store.clone(),
        registrations: store.clone(),
        tokens: store.clone(),
    }
}

#[tokio::test]
async fn should_create_exactly_one_client_account() {
    let store = MemoryStore::new();
    let out = client_usecase(&store).execute(input("a@x.com")).await.unwrap();

    assert_eq!(store.user_count(), 1);
    assert_eq!(out.user.role, AccountRole::Client);
    assert!(out.user.role.is_client());
    assert!(!out.user.role.is_therapist());
    assert_eq!(out.token.len(), 40);
    // Internal and public identifiers are distinct values.
    assert_ne!(out.user.id, out.user.public_id);
}

#[tokio::test]
async fn should_reject_duplicate_email_on_second_registration() {
    let store = MemoryStore::new();
    client_usecase(&store).execute(input("a@x.com")).await.unwrap();

    let result = client_usecase(&store).execute(input("a@x.com")).await;
    assert!(matches!(result, Err(ApiError::EmailTaken)));
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn should_persist_nothing_on_password_mismatch() {
    let store = MemoryStore::with_unused_code("ABC123");
    let result = therapist_usecase(&store)
        .execute(RegisterTherapistInput {
            register: RegisterInput {
                password_confirm: "different".to_owned(),
                ..input("t@x.com")
            },
            invite_code: "ABC123".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::PasswordMismatch)));
    assert_eq!(store.user_count(), 0);
    assert!(!store.invite("ABC123").unwrap().is_used);
}

#[tokio::test]
async fn should_consume_invite_code_exactly_once() {
    let store = MemoryStore::with_unused_code("ABC123");
    let out = therapist_usecase(&store)
        .execute(RegisterTherapistInput {
            register: input("t@x.com"),
            invite_code: "ABC123".to_owned(),
        })
        .await
        .unwrap();

    assert!(out.user.role.is_therapist());
    let invite = store.invite("ABC123").unwrap();
    assert!(invite.is_used);
    assert_eq!(invite.used_by, Some(out.user.id));
    assert!(invite.used_at.is_some());
}

#[tokio::test]
async fn should_reject_already_used_invite_code_without_new_user() {
    let store = MemoryStore::with_unused_code("ABC123");
    therapist_usecase(&store)
        .execute(RegisterTherapistInput {
            register: input("first@x.com"),
            invite_code: "ABC123".to_owned(),
        })
        .await
        .unwrap();

    let result = therapist_usecase(&store)
        .execute(RegisterTherapistInput {
            register: input("second@x.com"),
            invite_code: "ABC123".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::InviteCodeInvalid)));
    assert_eq!(store.user_count(), 1);
}

#[tokio::test]
async fn should_reject_unknown_invite_code() {
    let store = MemoryStore::new();
    let result = therapist_usecase(&store)
        .execute(RegisterTherapistInput {
            register: input("t@x.com"),
            invite_code: "NOSUCHCODE".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(ApiError::InviteCodeInvalid)));
    assert_eq!(store.user_count(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn should_let_exactly_one_of_two_concurrent_registrations_win() {
    let store = MemoryStore::with_unused_code("RACE01");

    let mut handles = vec![];
    for email in ["one@x.com", "two@x.com"] {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let usecase = RegisterTherapistUseCase {
                users: store.clone(),
                registrations: store.clone(),
                tokens: store,
            };
            usecase
                .execute(RegisterTherapistInput {
                    register: input(email),
                    invite_code: "RACE01".to_owned(),
                })
                .await
        }));
    }

    let mut winners = 0;
    let mut losers = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => winners += 1,
            Err(ApiError::InviteCodeInvalid) => losers += 1,
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(losers, 1);
    assert_eq!(store.user_count(), 1);
    assert!(store.invite("RACE01").unwrap().is_used);
}
