use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::artwork::{ArtworkStatus, ArtworkView};
use crate::domain::errors::DomainError;
use crate::domain::ports::ArtworkRepository;
use crate::schema::artwork_full_info;

use super::models::ArtworkFullInfoRow;

pub struct DieselArtworkRepository {
    pool: DbPool,
}

impl DieselArtworkRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ArtworkRepository for DieselArtworkRepository {
    /// Rows come back in whatever order the view produces them; no ordering
    /// is guaranteed to callers.
    fn list_available(&self) -> Result<Vec<ArtworkView>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = artwork_full_info::table
            .filter(artwork_full_info::status.eq(ArtworkStatus::Available.as_str()))
            .select(ArtworkFullInfoRow::as_select())
            .load(&mut conn)?;

        rows.into_iter().map(ArtworkView::try_from).collect()
    }

    fn find_by_id(&self, id: i32) -> Result<Option<ArtworkView>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = artwork_full_info::table
            .filter(artwork_full_info::id.eq(id))
            .select(ArtworkFullInfoRow::as_select())
            .first(&mut conn)
            .optional()?;

        row.map(ArtworkView::try_from).transpose()
    }
}
