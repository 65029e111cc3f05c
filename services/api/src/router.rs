use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use mindora_core::health::{healthz, readyz};
use mindora_core::middleware::request_id_layer;

use crate::handlers::{
    auth::{current_user, login, logout, register_client, register_therapist},
    directory::{
        get_therapist, list_therapists, public_profile, therapist_photos, therapist_publications,
    },
    invite::{create_invite, list_invites},
    photo::{add_photo, delete_photo, my_photos, update_photo},
    profile::{update_avatar, update_base, update_client, update_therapist},
    publication::{create_publication, delete_publication, my_publications, update_publication},
    reference::{list_languages, list_skills},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let media_dir = ServeDir::new(state.media.root());
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Auth
        .route("/auth/register/client", post(register_client))
        .route("/auth/register/therapist", post(register_therapist))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/user", get(current_user))
        // Public directory
        .route("/therapists", get(list_therapists))
        .route("/therapists/{id}", get(get_therapist))
        .route("/therapists/{id}/photos", get(therapist_photos))
        .route("/therapists/{id}/publications", get(therapist_publications))
        .route("/profiles/{public_id}", get(public_profile))
        // Reference data
        .route("/skills", get(list_skills))
        .route("/languages", get(list_languages))
        // Own profile
        .route("/profile/base", patch(update_base))
        .route("/profile/avatar", put(update_avatar))
        .route("/profile/therapist", patch(update_therapist))
        .route("/profile/client", patch(update_client))
        // Own gallery
        .route("/profile/photos", get(my_photos))
        .route("/profile/photos", post(add_photo))
        .route("/profile/photos/{id}", patch(update_photo))
        .route("/profile/photos/{id}", delete(delete_photo))
        // Own publications
        .route("/profile/publications", get(my_publications))
        .route("/profile/publications", post(create_publication))
        .route("/profile/publications/{id}", patch(update_publication))
        .route("/profile/publications/{id}", delete(delete_publication))
        // Invite administration
        .route("/invite-codes", post(create_invite))
        .route("/invite-codes", get(list_invites))
        // Uploaded media
        .nest_service("/media", media_dir)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
