use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel as _, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr,
    TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use mindora_api_schema::{
    auth_tokens, client_interests, client_profiles, invite_codes, languages, publications, skills,
    therapist_languages, therapist_photos, therapist_profiles, user_profiles, users,
};
use mindora_domain::pagination::PageRequest;
use mindora_domain::role::{AccountRole, Gender, TherapistStatus};

use crate::domain::repository::{
    ClientProfileUpdate, DirectoryRepository, InviteCodeRepository, PhotoRepository,
    ProfileRepository, PublicationRepository, ReferenceRepository, RegistrationPort,
    TherapistProfileUpdate, TokenRepository, UserRepository,
};
use crate::domain::types::{
    Account, BaseProfile, ClientProfile, DirectoryFilter, InviteCode, Language, NewRegistration,
    Publication, RoleProfile, Skill, TherapistListing, TherapistPhoto, TherapistProfile, User,
};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_public_id(&self, public_id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::PublicId.eq(public_id))
            .one(&self.db)
            .await
            .context("find user by public id")?;
        model.map(user_from_model).transpose()
    }

    async fn password_hash_by_email(&self, email: &str) -> Result<Option<String>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("load password hash")?;
        Ok(model.map(|m| m.password_hash))
    }
}

fn user_from_model(model: users::Model) -> Result<User, ApiError> {
    let role = AccountRole::from_i16(model.role)
        .ok_or_else(|| anyhow::anyhow!("unknown role value {} for user {}", model.role, model.id))?;
    Ok(User {
        id: model.id,
        public_id: model.public_id,
        email: model.email,
        username: model.username,
        first_name: model.first_name,
        last_name: model.last_name,
        role,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn base_profile_from_model(model: user_profiles::Model) -> Result<BaseProfile, ApiError> {
    let gender = model
        .gender
        .map(|v| {
            Gender::from_i16(v)
                .ok_or_else(|| anyhow::anyhow!("unknown gender value {v} for user {}", model.user_id))
        })
        .transpose()?;
    Ok(BaseProfile {
        user_id: model.user_id,
        gender,
        avatar_path: model.avatar_path,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Registration port ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRegistrationPort {
    pub db: DatabaseConnection,
}

impl RegistrationPort for DbRegistrationPort {
    async fn register(&self, registration: &NewRegistration) -> Result<User, ApiError> {
        let now = Utc::now();
        // Explicit begin/commit: the invite-code claim needs a conditional
        // abort on rows_affected. An uncommitted transaction rolls back on drop.
        let txn = self.db.begin().await.context("begin registration")?;

        let inserted = users::ActiveModel {
            id: Set(registration.user_id),
            public_id: Set(registration.public_id),
            email: Set(registration.email.clone()),
            username: Set(registration.username.clone()),
            password_hash: Set(registration.password_hash.clone()),
            first_name: Set(registration.first_name.clone()),
            last_name: Set(registration.last_name.clone()),
            role: Set(registration.role.as_i16()),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await;

        let user_model = match inserted {
            Ok(model) => model,
            // The unique email constraint backstops the use-case pre-check.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(ApiError::EmailTaken);
            }
            Err(e) => return Err(anyhow::Error::from(e).context("insert user").into()),
        };

        user_profiles::ActiveModel {
            user_id: Set(registration.user_id),
            gender: Set(None),
            avatar_path: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await
        .context("insert base profile")?;

        match registration.role {
            AccountRole::Client => {
                client_profiles::ActiveModel {
                    user_id: Set(registration.user_id),
                    request_text: Set(String::new()),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await
                .context("insert client profile")?;
            }
            AccountRole::Therapist => {
                therapist_profiles::ActiveModel {
                    user_id: Set(registration.user_id),
                    bio: Set(String::new()),
                    experience_years: Set(0),
                    status: Set(TherapistStatus::default().as_i16()),
                    is_verified: Set(false),
                    is_subscribed: Set(false),
                    total_hours_worked: Set(0),
                    display_hours: Set(false),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(&txn)
                .await
                .context("insert therapist profile")?;

                let code = registration
                    .invite_code
                    .as_deref()
                    .ok_or(ApiError::InviteCodeInvalid)?;
                // Atomic claim: only one concurrent registration can flip
                // is_used. Zero affected rows means unknown or already used.
                let claimed = invite_codes::Entity::update_many()
                    .filter(invite_codes::Column::Code.eq(code))
                    .filter(invite_codes::Column::IsUsed.eq(false))
                    .col_expr(invite_codes::Column::IsUsed, Expr::value(true))
                    .col_expr(invite_codes::Column::UsedAt, Expr::value(now))
                    .col_expr(invite_codes::Column::UsedBy, Expr::value(registration.user_id))
                    .exec(&txn)
                    .await
                    .context("claim invite code")?;
                if claimed.rows_affected == 0 {
                    return Err(ApiError::InviteCodeInvalid);
                }
            }
            AccountRole::Admin => {
                return Err(anyhow::anyhow!("admin accounts cannot self-register").into());
            }
        }

        txn.commit().await.context("commit registration")?;
        user_from_model(user_model)
    }
}

// ── Token repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTokenRepository {
    pub db: DatabaseConnection,
}

impl TokenRepository for DbTokenRepository {
    async fn fetch_or_create(&self, user_id: Uuid, candidate: &str) -> Result<String, ApiError> {
        let existing = auth_tokens::Entity::find()
            .filter(auth_tokens::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find auth token")?;
        if let Some(token) = existing {
            return Ok(token.key);
        }

        let inserted = auth_tokens::ActiveModel {
            key: Set(candidate.to_owned()),
            user_id: Set(user_id),
            created_at: Set(Utc::now()),
        }
        .insert(&self.db)
        .await;

        match inserted {
            Ok(token) => Ok(token.key),
            // Lost a concurrent-login race on the unique user_id; the winner's
            // token is the one to hand out.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let token = auth_tokens::Entity::find()
                    .filter(auth_tokens::Column::UserId.eq(user_id))
                    .one(&self.db)
                    .await
                    .context("refetch auth token")?
                    .ok_or_else(|| anyhow::anyhow!("auth token vanished after conflict"))?;
                Ok(token.key)
            }
            Err(e) => Err(anyhow::Error::from(e).context("insert auth token").into()),
        }
    }

    async fn find_user_id(&self, key: &str) -> Result<Option<Uuid>, ApiError> {
        let model = auth_tokens::Entity::find_by_id(key.to_owned())
            .one(&self.db)
            .await
            .context("find auth token by key")?;
        Ok(model.map(|t| t.user_id))
    }

    async fn revoke(&self, user_id: Uuid) -> Result<bool, ApiError> {
        let result = auth_tokens::Entity::delete_many()
            .filter(auth_tokens::Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .context("revoke auth token")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Invite code repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbInviteCodeRepository {
    pub db: DatabaseConnection,
}

impl InviteCodeRepository for DbInviteCodeRepository {
    async fn create(&self, invite: &InviteCode) -> Result<(), ApiError> {
        invite_codes::ActiveModel {
            id: Set(invite.id),
            code: Set(invite.code.clone()),
            is_used: Set(invite.is_used),
            created_by: Set(invite.created_by),
            used_by: Set(invite.used_by),
            created_at: Set(invite.created_at),
            used_at: Set(invite.used_at),
        }
        .insert(&self.db)
        .await
        .context("create invite code")?;
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<InviteCode>, ApiError> {
        let models = invite_codes::Entity::find()
            .order_by_desc(invite_codes::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.clamped().per_page as u64)
            .all(&self.db)
            .await
            .context("list invite codes")?;
        Ok(models.into_iter().map(invite_from_model).collect())
    }
}

fn invite_from_model(model: invite_codes::Model) -> InviteCode {
    InviteCode {
        id: model.id,
        code: model.code,
        is_used: model.is_used,
        created_by: model.created_by,
        used_by: model.used_by,
        created_at: model.created_at,
        used_at: model.used_at,
    }
}

// ── Directory repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDirectoryRepository {
    pub db: DatabaseConnection,
}

impl DirectoryRepository for DbDirectoryRepository {
    async fn list_visible(
        &self,
        filter: DirectoryFilter,
        page: PageRequest,
    ) -> Result<Vec<TherapistListing>, ApiError> {
        let mut query = therapist_profiles::Entity::find()
            .filter(therapist_profiles::Column::IsVerified.eq(true))
            .filter(therapist_profiles::Column::IsSubscribed.eq(true));

        if let Some(skill_id) = filter.skill_id {
            query = query.filter(
                therapist_profiles::Column::UserId.in_subquery(
                    sea_orm::sea_query::Query::select()
                        .column(therapist_skills::Column::UserId)
                        .from(therapist_skills::Entity)
                        .and_where(Expr::col(therapist_skills::Column::SkillId).eq(skill_id))
                        .to_owned(),
                ),
            );
        }
        if let Some(language_id) = filter.language_id {
            query = query.filter(
                therapist_profiles::Column::UserId.in_subquery(
                    sea_orm::sea_query::Query::select()
                        .column(therapist_languages::Column::UserId)
                        .from(therapist_languages::Entity)
                        .and_where(
                            Expr::col(therapist_languages::Column::LanguageId).eq(language_id),
                        )
                        .to_owned(),
                ),
            );
        }

        let models = query
            .order_by_desc(therapist_profiles::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.clamped().per_page as u64)
            .all(&self.db)
            .await
            .context("list visible therapists")?;

        let mut listings = Vec::with_capacity(models.len());
        for model in models {
            listings.push(self.load_listing(model).await?);
        }
        Ok(listings)
    }

    async fn get_visible(&self, user_id: Uuid) -> Result<Option<TherapistListing>, ApiError> {
        let model = therapist_profiles::Entity::find_by_id(user_id)
            .filter(therapist_profiles::Column::IsVerified.eq(true))
            .filter(therapist_profiles::Column::IsSubscribed.eq(true))
            .one(&self.db)
            .await
            .context("get visible therapist")?;
        match model {
            Some(model) => Ok(Some(self.load_listing(model).await?)),
            None => Ok(None),
        }
    }
}

impl DbDirectoryRepository {
    async fn load_listing(
        &self,
        model: therapist_profiles::Model,
    ) -> Result<TherapistListing, ApiError> {
        let user_id = model.user_id;
        let user = users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("load listing user")?
            .ok_or_else(|| anyhow::anyhow!("therapist profile {user_id} has no user row"))?;
        let base = user_profiles::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("load listing base profile")?
            .ok_or_else(|| anyhow::anyhow!("therapist profile {user_id} has no base profile"))?;
        let profile = therapist_profile_from_model(&self.db, model).await?;
        Ok(TherapistListing {
            user: user_from_model(user)?,
            base: base_profile_from_model(base)?,
            profile,
        })
    }
}

async fn therapist_profile_from_model(
    db: &DatabaseConnection,
    model: therapist_profiles::Model,
) -> Result<TherapistProfile, ApiError> {
    let status = TherapistStatus::from_i16(model.status).ok_or_else(|| {
        anyhow::anyhow!("unknown status value {} for therapist {}", model.status, model.user_id)
    })?;

    let skill_ids: Vec<i32> = therapist_skills::Entity::find()
        .filter(therapist_skills::Column::UserId.eq(model.user_id))
        .all(db)
        .await
        .context("load therapist skill links")?
        .into_iter()
        .map(|link| link.skill_id)
        .collect();
    let skills = skills::Entity::find()
        .filter(skills::Column::Id.is_in(skill_ids))
        .order_by_asc(skills::Column::Name)
        .all(db)
        .await
        .context("load therapist skills")?
        .into_iter()
        .map(skill_from_model)
        .collect();

    let language_ids: Vec<i32> = therapist_languages::Entity::find()
        .filter(therapist_languages::Column::UserId.eq(model.user_id))
        .all(db)
        .await
        .context("load therapist language links")?
        .into_iter()
        .map(|link| link.language_id)
        .collect();
    let languages = languages::Entity::find()
        .filter(languages::Column::Id.is_in(language_ids))
        .order_by_asc(languages::Column::Name)
        .all(db)
        .await
        .context("load therapist languages")?
        .into_iter()
        .map(language_from_model)
        .collect();

    Ok(TherapistProfile {
        user_id: model.user_id,
        bio: model.bio,
        experience_years: model.experience_years,
        status,
        is_verified: model.is_verified,
        is_subscribed: model.is_subscribed,
        total_hours_worked: model.total_hours_worked,
        display_hours: model.display_hours,
        skills,
        languages,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

async fn client_profile_from_model(
    db: &DatabaseConnection,
    model: client_profiles::Model,
) -> Result<ClientProfile, ApiError> {
    let interest_ids: Vec<i32> = client_interests::Entity::find()
        .filter(client_interests::Column::UserId.eq(model.user_id))
        .all(db)
        .await
        .context("load client interest links")?
        .into_iter()
        .map(|link| link.skill_id)
        .collect();
    let interests = skills::Entity::find()
        .filter(skills::Column::Id.is_in(interest_ids))
        .order_by_asc(skills::Column::Name)
        .all(db)
        .await
        .context("load client interests")?
        .into_iter()
        .map(skill_from_model)
        .collect();

    Ok(ClientProfile {
        user_id: model.user_id,
        request_text: model.request_text,
        interests,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

fn skill_from_model(model: skills::Model) -> Skill {
    Skill {
        id: model.id,
        name: model.name,
    }
}

fn language_from_model(model: languages::Model) -> Language {
    Language {
        id: model.id,
        name: model.name,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn load_account(&self, user_id: Uuid) -> Result<Option<Account>, ApiError> {
        let Some(user_model) = users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("load account user")?
        else {
            return Ok(None);
        };
        let base_model = user_profiles::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .context("load account base profile")?
            .ok_or_else(|| anyhow::anyhow!("user {user_id} has no base profile"))?;

        let user = user_from_model(user_model)?;
        let role_profile = match user.role {
            AccountRole::Client => {
                let model = client_profiles::Entity::find_by_id(user_id)
                    .one(&self.db)
                    .await
                    .context("load client profile")?
                    .ok_or_else(|| anyhow::anyhow!("client {user_id} has no client profile"))?;
                RoleProfile::Client(client_profile_from_model(&self.db, model).await?)
            }
            AccountRole::Therapist => {
                let model = therapist_profiles::Entity::find_by_id(user_id)
                    .one(&self.db)
                    .await
                    .context("load therapist profile")?
                    .ok_or_else(|| {
                        anyhow::anyhow!("therapist {user_id} has no therapist profile")
                    })?;
                RoleProfile::Therapist(therapist_profile_from_model(&self.db, model).await?)
            }
            AccountRole::Admin => RoleProfile::Admin,
        };

        Ok(Some(Account {
            user,
            base: base_profile_from_model(base_model)?,
            role_profile,
        }))
    }

    async fn update_base(
        &self,
        user_id: Uuid,
        first_name: Option<&str>,
        last_name: Option<&str>,
        gender: Option<Gender>,
    ) -> Result<(), ApiError> {
        let now = Utc::now();
        let txn = self.db.begin().await.context("begin base update")?;

        if first_name.is_some() || last_name.is_some() {
            let mut user = users::ActiveModel {
                id: Set(user_id),
                ..Default::default()
            };
            if let Some(name) = first_name {
                user.first_name = Set(name.to_owned());
            }
            if let Some(name) = last_name {
                user.last_name = Set(name.to_owned());
            }
            user.updated_at = Set(now);
            user.update(&txn).await.context("update user names")?;
        }

        if let Some(gender) = gender {
            user_profiles::ActiveModel {
                user_id: Set(user_id),
                gender: Set(Some(gender.as_i16())),
                updated_at: Set(now),
                ..Default::default()
            }
            .update(&txn)
            .await
            .context("update profile gender")?;
        }

        txn.commit().await.context("commit base update")?;
        Ok(())
    }

    async fn update_avatar(&self, user_id: Uuid, avatar_path: &str) -> Result<(), ApiError> {
        user_profiles::ActiveModel {
            user_id: Set(user_id),
            avatar_path: Set(Some(avatar_path.to_owned())),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update avatar path")?;
        Ok(())
    }

    async fn update_therapist(
        &self,
        user_id: Uuid,
        fields: TherapistProfileUpdate<'_>,
    ) -> Result<bool, ApiError> {
        let txn = self.db.begin().await.context("begin therapist update")?;

        let Some(existing) = therapist_profiles::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .context("find therapist profile for update")?
        else {
            return Ok(false);
        };

        let mut profile = existing.into_active_model();
        if let Some(bio) = fields.bio {
            profile.bio = Set(bio.to_owned());
        }
        if let Some(years) = fields.experience_years {
            profile.experience_years = Set(years);
        }
        if let Some(status) = fields.status {
            profile.status = Set(status.as_i16());
        }
        if let Some(display) = fields.display_hours {
            profile.display_hours = Set(display);
        }
        profile.updated_at = Set(Utc::now());
        profile
            .update(&txn)
            .await
            .context("update therapist profile")?;

        if let Some(ids) = fields.skill_ids {
            therapist_skills::Entity::delete_many()
                .filter(therapist_skills::Column::UserId.eq(user_id))
                .exec(&txn)
                .await
                .context("clear therapist skills")?;
            if !ids.is_empty() {
                let links = ids.iter().map(|&skill_id| therapist_skills::ActiveModel {
                    user_id: Set(user_id),
                    skill_id: Set(skill_id),
                });
                therapist_skills::Entity::insert_many(links)
                    .exec(&txn)
                    .await
                    .context("insert therapist skills")?;
            }
        }

        if let Some(ids) = fields.language_ids {
            therapist_languages::Entity::delete_many()
                .filter(therapist_languages::Column::UserId.eq(user_id))
                .exec(&txn)
                .await
                .context("clear therapist languages")?;
            if !ids.is_empty() {
                let links = ids
                    .iter()
                    .map(|&language_id| therapist_languages::ActiveModel {
                        user_id: Set(user_id),
                        language_id: Set(language_id),
                    });
                therapist_languages::Entity::insert_many(links)
                    .exec(&txn)
                    .await
                    .context("insert therapist languages")?;
            }
        }

        txn.commit().await.context("commit therapist update")?;
        Ok(true)
    }

    async fn update_client(
        &self,
        user_id: Uuid,
        fields: ClientProfileUpdate<'_>,
    ) -> Result<bool, ApiError> {
        let txn = self.db.begin().await.context("begin client update")?;

        let Some(existing) = client_profiles::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .context("find client profile for update")?
        else {
            return Ok(false);
        };

        let mut profile = existing.into_active_model();
        if let Some(text) = fields.request_text {
            profile.request_text = Set(text.to_owned());
        }
        profile.updated_at = Set(Utc::now());
        profile.update(&txn).await.context("update client profile")?;

        if let Some(ids) = fields.interest_ids {
            client_interests::Entity::delete_many()
                .filter(client_interests::Column::UserId.eq(user_id))
                .exec(&txn)
                .await
                .context("clear client interests")?;
            if !ids.is_empty() {
                let links = ids.iter().map(|&skill_id| client_interests::ActiveModel {
                    user_id: Set(user_id),
                    skill_id: Set(skill_id),
                });
                client_interests::Entity::insert_many(links)
                    .exec(&txn)
                    .await
                    .context("insert client interests")?;
            }
        }

        txn.commit().await.context("commit client update")?;
        Ok(true)
    }
}

// ── Photo repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPhotoRepository {
    pub db: DatabaseConnection,
}

impl PhotoRepository for DbPhotoRepository {
    async fn list_by_therapist(
        &self,
        therapist_id: Uuid,
    ) -> Result<Vec<TherapistPhoto>, ApiError> {
        let models = therapist_photos::Entity::find()
            .filter(therapist_photos::Column::TherapistId.eq(therapist_id))
            .order_by_asc(therapist_photos::Column::Position)
            .order_by_asc(therapist_photos::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list therapist photos")?;
        Ok(models.into_iter().map(photo_from_model).collect())
    }

    async fn create(&self, photo: &TherapistPhoto) -> Result<(), ApiError> {
        therapist_photos::ActiveModel {
            id: Set(photo.id),
            therapist_id: Set(photo.therapist_id),
            image_path: Set(photo.image_path.clone()),
            caption: Set(photo.caption.clone()),
            position: Set(photo.position),
            created_at: Set(photo.created_at),
        }
        .insert(&self.db)
        .await
        .context("create therapist photo")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        therapist_id: Uuid,
        caption: Option<&str>,
        position: Option<i32>,
    ) -> Result<bool, ApiError> {
        let mut update = therapist_photos::Entity::update_many()
            .filter(therapist_photos::Column::Id.eq(id))
            .filter(therapist_photos::Column::TherapistId.eq(therapist_id));
        if let Some(caption) = caption {
            update = update.col_expr(therapist_photos::Column::Caption, Expr::value(caption));
        }
        if let Some(position) = position {
            update = update.col_expr(therapist_photos::Column::Position, Expr::value(position));
        }
        let result = update.exec(&self.db).await.context("update therapist photo")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid, therapist_id: Uuid) -> Result<bool, ApiError> {
        let result = therapist_photos::Entity::delete_many()
            .filter(therapist_photos::Column::Id.eq(id))
            .filter(therapist_photos::Column::TherapistId.eq(therapist_id))
            .exec(&self.db)
            .await
            .context("delete therapist photo")?;
        Ok(result.rows_affected > 0)
    }
}

fn photo_from_model(model: therapist_photos::Model) -> TherapistPhoto {
    TherapistPhoto {
        id: model.id,
        therapist_id: model.therapist_id,
        image_path: model.image_path,
        caption: model.caption,
        position: model.position,
        created_at: model.created_at,
    }
}

// ── Publication repository ───────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPublicationRepository {
    pub db: DatabaseConnection,
}

impl PublicationRepository for DbPublicationRepository {
    async fn list_by_author(
        &self,
        author_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Publication>, ApiError> {
        let models = publications::Entity::find()
            .filter(publications::Column::AuthorId.eq(author_id))
            .order_by_desc(publications::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.clamped().per_page as u64)
            .all(&self.db)
            .await
            .context("list publications")?;
        Ok(models.into_iter().map(publication_from_model).collect())
    }

    async fn create(&self, publication: &Publication) -> Result<(), ApiError> {
        publications::ActiveModel {
            id: Set(publication.id),
            author_id: Set(publication.author_id),
            title: Set(publication.title.clone()),
            body: Set(publication.body.clone()),
            created_at: Set(publication.created_at),
            updated_at: Set(publication.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create publication")?;
        Ok(())
    }

    async fn update(
        &self,
        id: Uuid,
        author_id: Uuid,
        title: Option<&str>,
        body: Option<&str>,
    ) -> Result<bool, ApiError> {
        let mut update = publications::Entity::update_many()
            .filter(publications::Column::Id.eq(id))
            .filter(publications::Column::AuthorId.eq(author_id))
            .col_expr(publications::Column::UpdatedAt, Expr::value(Utc::now()));
        if let Some(title) = title {
            update = update.col_expr(publications::Column::Title, Expr::value(title));
        }
        if let Some(body) = body {
            update = update.col_expr(publications::Column::Body, Expr::value(body));
        }
        let result = update.exec(&self.db).await.context("update publication")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid, author_id: Uuid) -> Result<bool, ApiError> {
        let result = publications::Entity::delete_many()
            .filter(publications::Column::Id.eq(id))
            .filter(publications::Column::AuthorId.eq(author_id))
            .exec(&self.db)
            .await
            .context("delete publication")?;
        Ok(result.rows_affected > 0)
    }
}

fn publication_from_model(model: publications::Model) -> Publication {
    Publication {
        id: model.id,
        author_id: model.author_id,
        title: model.title,
        body: model.body,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Reference repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbReferenceRepository {
    pub db: DatabaseConnection,
}

impl ReferenceRepository for DbReferenceRepository {
    async fn list_skills(&self) -> Result<Vec<Skill>, ApiError> {
        let models = skills::Entity::find()
            .order_by_asc(skills::Column::Name)
            .all(&self.db)
            .await
            .context("list skills")?;
        Ok(models.into_iter().map(skill_from_model).collect())
    }

    async fn list_languages(&self) -> Result<Vec<Language>, ApiError> {
        let models = languages::Entity::find()
            .order_by_asc(languages::Column::Name)
            .all(&self.db)
            .await
            .context("list languages")?;
        Ok(models.into_iter().map(language_from_model).collect())
    }

    async fn skills_exist(&self, ids: &[i32]) -> Result<bool, ApiError> {
        if ids.is_empty() {
            return Ok(true);
        }
        let count = skills::Entity::find()
            .filter(skills::Column::Id.is_in(ids.iter().copied()))
            .count(&self.db)
            .await
            .context("count skills")?;
        Ok(count == ids.len() as u64)
    }

    async fn languages_exist(&self, ids: &[i32]) -> Result<bool, ApiError> {
        if ids.is_empty() {
            return Ok(true);
        }
        let count = languages::Entity::find()
            .filter(languages::Column::Id.is_in(ids.iter().copied()))
            .count(&self.db)
            .await
            .context("count languages")?;
        Ok(count == ids.len() as u64)
    }
}
