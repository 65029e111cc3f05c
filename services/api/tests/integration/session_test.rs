use mindora_api::domain::repository::TokenRepository;
use mindora_api::error::ApiError;
use mindora_api::usecase::register::{RegisterClientUseCase, RegisterInput};
use mindora_api::usecase::session::{LoginInput, LoginUseCase, LogoutUseCase};

use crate::helpers::MemoryStore;

async fn register(store: &MemoryStore, email: &str, password: &str) -> String {
    let usecase = RegisterClientUseCase {
        users: store.clone(),
        registrations: store.clone(),
        tokens: store.clone(),
    };
    usecase
        .execute(RegisterInput {
            email: email.to_owned(),
            username: None,
            password: password.to_owned(),
            password_confirm: password.to_owned(),
            first_name: "A".to_owned(),
            last_name: "B".to_owned(),
        })
        .await
        .unwrap()
        .token
}

#[tokio::test]
async fn should_reuse_registration_token_on_login() {
    let store = MemoryStore::new();
    let registration_token = register(&store, "a@x.com", "p1").await;

    let usecase = LoginUseCase {
        users: store.clone(),
        tokens: store.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: "a@x.com".to_owned(),
            password: "p1".to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(out.token, registration_token);
}

#[tokio::test]
async fn should_reject_login_with_wrong_password() {
    let store = MemoryStore::new();
    register(&store, "a@x.com", "p1").await;

    let usecase = LoginUseCase {
        users: store.clone(),
        tokens: store.clone(),
    };
    let result = usecase
        .execute(LoginInput {
            email: "a@x.com".to_owned(),
            password: "wrong".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiError::InvalidCredentials)));
}

#[tokio::test]
async fn should_not_authenticate_revoked_token() {
    let store = MemoryStore::new();
    let token = register(&store, "a@x.com", "p1").await;

    let user_id = store.find_user_id(&token).await.unwrap().unwrap();

    let logout = LogoutUseCase {
        tokens: store.clone(),
    };
    logout.execute(user_id).await.unwrap();

    assert_eq!(store.find_user_id(&token).await.unwrap(), None);
}

#[tokio::test]
async fn should_issue_fresh_token_after_logout_and_login() {
    let store = MemoryStore::new();
    let first = register(&store, "a@x.com", "p1").await;

    let user_id = store.find_user_id(&first).await.unwrap().unwrap();
    LogoutUseCase {
        tokens: store.clone(),
    }
    .execute(user_id)
    .await
    .unwrap();

    let usecase = LoginUseCase {
        users: store.clone(),
        tokens: store.clone(),
    };
    let out = usecase
        .execute(LoginInput {
            email: "a@x.com".to_owned(),
            password: "p1".to_owned(),
        })
        .await
        .unwrap();

    assert_ne!(out.token, first);
    assert_eq!(store.find_user_id(&out.token).await.unwrap(), Some(user_id));
}
