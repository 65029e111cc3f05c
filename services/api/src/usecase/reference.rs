use crate::domain::repository::ReferenceRepository;
use crate::domain::types::{Language, Skill};
use crate::error::ApiError;

pub struct ListSkillsUseCase<R: ReferenceRepository> {
    pub reference: R,
}

impl<R: ReferenceRepository> ListSkillsUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Skill>, ApiError> {
        self.reference.list_skills().await
    }
}

pub struct ListLanguagesUseCase<R: ReferenceRepository> {
    pub reference: R,
}

impl<R: ReferenceRepository> ListLanguagesUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<Language>, ApiError> {
        self.reference.list_languages().await
    }
}
