//! UniversityStore implementation for PgStorage.

use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder, Row};
use unidir_core::{
    PreparedUniversity, University, UniversityFilter, UniversityUpdate, clamp_limit,
};

use super::{COLUMNS, PgStorage, row_to_university, usize_to_i64};
use crate::error::StorageError;
use crate::traits::UniversityStore;

#[async_trait]
impl UniversityStore for PgStorage {
    async fn create(&self, prepared: &PreparedUniversity) -> Result<University, StorageError> {
        let id = uuid::Uuid::new_v4().to_string();
        sqlx::query(
            "INSERT INTO universities
               (id, name, slug, description, address, contacts, avg_gre, avg_lang, fees)
               VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(&id)
        .bind(&prepared.name)
        .bind(&prepared.slug)
        .bind(&prepared.description)
        .bind(&prepared.address)
        .bind(serde_json::to_value(&prepared.contacts)?)
        .bind(prepared.avg_gre)
        .bind(prepared.avg_lang)
        .bind(prepared.fees)
        .execute(&self.pool)
        .await?;

        tracing::debug!(id = %id, slug = %prepared.slug, "university created");

        Ok(University::new(
            id,
            prepared.name.clone(),
            prepared.slug.clone(),
            prepared.description.clone(),
            prepared.address.clone(),
            prepared.contacts.clone(),
            prepared.avg_gre,
            prepared.avg_lang,
            prepared.fees,
        ))
    }

    async fn update_one(
        &self,
        filter: &UniversityFilter,
        update: &UniversityUpdate,
    ) -> Result<University, StorageError> {
        let mut tx = self.pool.begin().await?;

        let matched = sqlx::query(&format!(
            "SELECT id FROM universities WHERE {} = $1 FOR UPDATE",
            filter.column()
        ))
        .bind(filter.value())
        .fetch_optional(&mut *tx)
        .await?;
        let Some(matched) = matched else {
            return Err(StorageError::NotFound { entity: "university", key: filter.to_string() });
        };
        let id: String = matched.try_get("id")?;

        if !update.is_empty() {
            let mut qb = QueryBuilder::<Postgres>::new("UPDATE universities SET ");
            {
                let mut sets = qb.separated(", ");
                if let Some(name) = &update.name {
                    sets.push("name = ").push_bind_unseparated(name.clone());
                }
                if let Some(slug) = &update.slug {
                    sets.push("slug = ").push_bind_unseparated(slug.clone());
                }
                if let Some(description) = &update.description {
                    sets.push("description = ").push_bind_unseparated(description.clone());
                }
                if let Some(address) = &update.address {
                    sets.push("address = ").push_bind_unseparated(address.clone());
                }
                if let Some(contacts) = &update.contacts {
                    sets.push("contacts = ").push_bind_unseparated(serde_json::to_value(contacts)?);
                }
                if let Some(avg_gre) = update.avg_gre {
                    sets.push("avg_gre = ").push_bind_unseparated(avg_gre);
                }
                if let Some(avg_lang) = update.avg_lang {
                    sets.push("avg_lang = ").push_bind_unseparated(avg_lang);
                }
                if let Some(fees) = update.fees {
                    sets.push("fees = ").push_bind_unseparated(fees);
                }
            }
            qb.push(" WHERE id = ").push_bind(id.clone());
            qb.build().execute(&mut *tx).await?;
            tracing::debug!(id = %id, fields = ?update.changed_fields(), "university updated");
        }

        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM universities WHERE id = $1"))
            .bind(&id)
            .fetch_one(&mut *tx)
            .await?;
        let record = row_to_university(&row)?;
        tx.commit().await?;
        Ok(record)
    }

    async fn get(&self, filter: &UniversityFilter) -> Result<Option<University>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM universities WHERE {} = $1",
            filter.column()
        ))
        .bind(filter.value())
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(row_to_university).transpose()
    }

    async fn list(&self, limit: usize) -> Result<Vec<University>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM universities ORDER BY name LIMIT $1"))
            .bind(usize_to_i64(clamp_limit(limit)))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_university).collect()
    }

    async fn count(&self) -> Result<usize, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM universities")
            .fetch_one(&self.pool)
            .await?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
