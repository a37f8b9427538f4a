use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::sql_types::{Integer, Nullable, Text};

use crate::domain::artwork::ArtworkView;
use crate::domain::errors::DomainError;
use crate::schema::artwork_full_info;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = artwork_full_info)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ArtworkFullInfoRow {
    pub id: i32,
    pub title: String,
    pub artist_id: i32,
    pub description: String,
    pub price: BigDecimal,
    pub status: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub artist_name: String,
    pub artist_birth_year: Option<i32>,
    pub artist_origin: Option<String>,
    pub artist_specialty: Option<String>,
}

impl TryFrom<ArtworkFullInfoRow> for ArtworkView {
    type Error = DomainError;

    fn try_from(row: ArtworkFullInfoRow) -> Result<Self, Self::Error> {
        let status = row.status.parse().map_err(DomainError::Internal)?;
        Ok(ArtworkView {
            id: row.id,
            title: row.title,
            artist_id: row.artist_id,
            description: row.description,
            price: row.price,
            status,
            image_url: row.image_url,
            created_at: row.created_at,
            artist_name: row.artist_name,
            artist_birth_year: row.artist_birth_year,
            artist_origin: row.artist_origin,
            artist_specialty: row.artist_specialty,
        })
    }
}

/// Result row of the `create_order` SQL function.
#[derive(Debug, QueryableByName)]
pub struct CreateOrderRow {
    #[diesel(sql_type = Text)]
    pub result: String,
    #[diesel(sql_type = Nullable<Integer>)]
    pub order_id: Option<i32>,
    #[diesel(sql_type = Nullable<Text>)]
    pub message: Option<String>,
}
