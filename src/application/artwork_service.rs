use std::sync::Arc;

use crate::domain::artwork::ArtworkView;
use crate::domain::errors::DomainError;
use crate::domain::ports::ArtworkRepository;

pub struct ArtworkService {
    repo: Arc<dyn ArtworkRepository>,
}

impl ArtworkService {
    pub fn new(repo: Arc<dyn ArtworkRepository>) -> Self {
        Self { repo }
    }

    pub fn list_available(&self) -> Result<Vec<ArtworkView>, DomainError> {
        self.repo.list_available()
    }

    /// Looks up one artwork regardless of status, so detail pages for
    /// reserved or sold pieces still resolve. The raw id is validated before
    /// any query is made.
    pub fn get_by_id(&self, raw_id: &str) -> Result<ArtworkView, DomainError> {
        let id = parse_artwork_id(raw_id)?;
        self.repo.find_by_id(id)?.ok_or(DomainError::NotFound)
    }
}

fn parse_artwork_id(raw: &str) -> Result<i32, DomainError> {
    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DomainError::Validation(format!(
            "Invalid artwork id '{raw}'"
        ))),
    }
}
