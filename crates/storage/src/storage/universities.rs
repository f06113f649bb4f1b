use rusqlite::{OptionalExtension, TransactionBehavior, params};
use unidir_core::{
    PreparedUniversity, University, UniversityFilter, UniversityUpdate, clamp_limit,
};

use super::{Storage, coerce_to_sql, get_conn, parse_json};
use crate::error::StorageError;

const COLUMNS: &str = "id, name, slug, description, address, contacts, avg_gre, avg_lang, fees";

impl Storage {
    /// Insert a prepared university under a fresh id.
    ///
    /// # Errors
    /// Returns `Duplicate` if `name` or `slug` is already taken.
    pub fn create_university(
        &self,
        prepared: &PreparedUniversity,
    ) -> Result<University, StorageError> {
        let conn = get_conn(&self.pool)?;
        let id = uuid::Uuid::new_v4().to_string();
        let contacts_json = serde_json::to_string(&prepared.contacts)?;

        conn.execute(
            "INSERT INTO universities
               (id, name, slug, description, address, contacts, avg_gre, avg_lang, fees)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                id,
                prepared.name,
                prepared.slug,
                prepared.description,
                prepared.address,
                contacts_json,
                prepared.avg_gre,
                prepared.avg_lang,
                prepared.fees,
            ],
        )?;

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

    /// Apply an update set to the one record matching `filter`.
    ///
    /// Resolving the filter, writing and re-reading happen in one immediate
    /// transaction, so a rejected write leaves the row untouched.
    ///
    /// # Errors
    /// Returns `NotFound` if nothing matches, `Duplicate` on a unique collision.
    pub fn update_university(
        &self,
        filter: &UniversityFilter,
        update: &UniversityUpdate,
    ) -> Result<University, StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let id: Option<String> = tx
            .query_row(
                &format!("SELECT id FROM universities WHERE {} = ?1", filter.column()),
                params![filter.value()],
                |row| row.get(0),
            )
            .optional()?;
        let Some(id) = id else {
            return Err(StorageError::NotFound { entity: "university", key: filter.to_string() });
        };

        if update.is_empty() {
            tracing::debug!(id = %id, "empty update, nothing to write");
        } else {
            let contacts_json = update.contacts.as_ref().map(serde_json::to_string).transpose()?;

            let mut sets: Vec<String> = Vec::new();
            let mut values: Vec<&dyn rusqlite::ToSql> = Vec::new();
            push_set(&mut sets, &mut values, "name", update.name.as_ref());
            push_set(&mut sets, &mut values, "slug", update.slug.as_ref());
            push_set(&mut sets, &mut values, "description", update.description.as_ref());
            push_set(&mut sets, &mut values, "address", update.address.as_ref());
            push_set(&mut sets, &mut values, "contacts", contacts_json.as_ref());
            push_set(&mut sets, &mut values, "avg_gre", update.avg_gre.as_ref());
            push_set(&mut sets, &mut values, "avg_lang", update.avg_lang.as_ref());
            push_set(&mut sets, &mut values, "fees", update.fees.as_ref());
            values.push(coerce_to_sql(&id));

            let sql = format!(
                "UPDATE universities SET {} WHERE id = ?{}",
                sets.join(", "),
                values.len()
            );
            tx.execute(&sql, values.as_slice())?;
            tracing::debug!(id = %id, fields = ?update.changed_fields(), "university updated");
        }

        let record = tx.query_row(
            &format!("SELECT {COLUMNS} FROM universities WHERE id = ?1"),
            params![id],
            Self::row_to_university,
        )?;
        tx.commit()?;
        Ok(record)
    }

    /// Get the university matching `filter`.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_university(
        &self,
        filter: &UniversityFilter,
    ) -> Result<Option<University>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let record = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM universities WHERE {} = ?1", filter.column()),
                params![filter.value()],
                Self::row_to_university,
            )
            .optional()?;
        Ok(record)
    }

    /// List universities ordered by name.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn list_universities(&self, limit: usize) -> Result<Vec<University>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt =
            conn.prepare(&format!("SELECT {COLUMNS} FROM universities ORDER BY name LIMIT ?1"))?;
        let results = stmt
            .query_map(params![clamp_limit(limit) as i64], Self::row_to_university)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(results)
    }

    /// Count stored universities.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count_universities(&self) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM universities", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn row_to_university(row: &rusqlite::Row<'_>) -> rusqlite::Result<University> {
        Ok(University::new(
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            parse_json(&row.get::<_, String>(5)?, 5)?,
            row.get(6)?,
            row.get(7)?,
            row.get(8)?,
        ))
    }
}

/// Append `column = ?N` when the field is present.
fn push_set<'a, T: rusqlite::ToSql>(
    sets: &mut Vec<String>,
    values: &mut Vec<&'a dyn rusqlite::ToSql>,
    column: &str,
    value: Option<&'a T>,
) {
    if let Some(value) = value {
        values.push(value);
        sets.push(format!("{column} = ?{}", values.len()));
    }
}
