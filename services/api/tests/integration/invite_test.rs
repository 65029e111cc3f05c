use chrono::Utc;
use uuid::Uuid;

use mindora_api::error::ApiError;
use mindora_api::usecase::invite::{CreateInviteCodeUseCase, ListInviteCodesUseCase};
use mindora_api::usecase::register::{
    RegisterInput, RegisterTherapistInput, RegisterTherapistUseCase,
};
use mindora_domain::pagination::PageRequest;
use mindora_domain::role::AccountRole;

use crate::helpers::MemoryStore;

fn admin() -> mindora_api::domain::types::User {
    let now = Utc::now();
    mindora_api::domain::types::User {
        id: Uuid::now_v7(),
        public_id: Uuid::new_v4(),
        email: "admin@x.com".to_owned(),
        username: "admin@x.com".to_owned(),
        first_name: "Ad".to_owned(),
        last_name: "Min".to_owned(),
        role: AccountRole::Admin,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn should_register_therapist_with_freshly_created_code() {
    let store = MemoryStore::new();

    let create = CreateInviteCodeUseCase {
        invites: store.clone(),
    };
    let admin = admin();
    let invite = create.execute(&admin).await.unwrap();
    assert_eq!(invite.created_by, Some(admin.id));

    let register = RegisterTherapistUseCase {
        users: store.clone(),
        registrations: store.clone(),
        tokens: store.clone(),
    };
    let out = register
        .execute(RegisterTherapistInput {
            register: RegisterInput {
                email: "t@x.com".to_owned(),
                username: None,
                password: "p1".to_owned(),
                password_confirm: "p1".to_owned(),
                first_name: "T".to_owned(),
                last_name: "U".to_owned(),
            },
            invite_code: invite.code.clone(),
        })
        .await
        .unwrap();

    let consumed = store.invite(&invite.code).unwrap();
    assert!(consumed.is_used);
    assert_eq!(consumed.used_by, Some(out.user.id));
}

#[tokio::test]
async fn should_forbid_invite_management_for_non_admins() {
    let store = MemoryStore::new();
    let mut caller = admin();
    caller.role = AccountRole::Therapist;

    let create = CreateInviteCodeUseCase {
        invites: store.clone(),
    };
    assert!(matches!(
        create.execute(&caller).await,
        Err(ApiError::Forbidden)
    ));

    let list = ListInviteCodesUseCase {
        invites: store.clone(),
    };
    assert!(matches!(
        list.execute(&caller, PageRequest::default()).await,
        Err(ApiError::Forbidden)
    ));
}

#[tokio::test]
async fn should_list_created_codes_for_admin() {
    let store = MemoryStore::new();
    let admin = admin();

    let create = CreateInviteCodeUseCase {
        invites: store.clone(),
    };
    create.execute(&admin).await.unwrap();
    create.execute(&admin).await.unwrap();

    let list = ListInviteCodesUseCase {
        invites: store.clone(),
    };
    let codes = list.execute(&admin, PageRequest::default()).await.unwrap();
    assert_eq!(codes.len(), 2);
    assert!(codes.iter().all(|c| !c.is_used));
}
