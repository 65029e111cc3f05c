use axum::{Json, extract::State};

use crate::error::ApiError;
use crate::handlers::responses::{LanguageBody, SkillBody};
use crate::state::AppState;
use crate::usecase::reference::{ListLanguagesUseCase, ListSkillsUseCase};

// ── GET /skills ──────────────────────────────────────────────────────────────

pub async fn list_skills(
    State(state): State<AppState>,
) -> Result<Json<Vec<SkillBody>>, ApiError> {
    let usecase = ListSkillsUseCase {
        reference: state.reference_repo(),
    };
    let skills = usecase.execute().await?;
    Ok(Json(skills.iter().map(SkillBody::from).collect()))
}

// ── GET /languages ───────────────────────────────────────────────────────────

pub async fn list_languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<LanguageBody>>, ApiError> {
    let usecase = ListLanguagesUseCase {
        reference: state.reference_repo(),
    };
    let languages = usecase.execute().await?;
    Ok(Json(languages.iter().map(LanguageBody::from).collect()))
}
