use std::sync::Arc;

use unidir_core::{
    NewUniversity, University, UniversityFilter, UniversityPatch, prepare_for_create,
    prepare_for_update,
};
use unidir_storage::{StorageBackend, UniversityStore};

use crate::ServiceError;

pub struct UniversityService {
    storage: Arc<StorageBackend>,
}

impl UniversityService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    /// Validate, derive the slug, then insert.
    pub async fn create_university(
        &self,
        candidate: NewUniversity,
    ) -> Result<University, ServiceError> {
        let prepared = prepare_for_create(candidate)?;
        match self.storage.create(&prepared).await {
            Ok(university) => {
                tracing::info!(id = %university.id, slug = %university.slug, "university created");
                Ok(university)
            },
            Err(e) => {
                if e.is_duplicate() {
                    tracing::debug!(slug = %prepared.slug, error = %e, "create rejected");
                }
                Err(e.into())
            },
        }
    }

    /// Derive the slug if the patch renames, then apply to the matched record.
    pub async fn update_university(
        &self,
        filter: UniversityFilter,
        patch: UniversityPatch,
    ) -> Result<University, ServiceError> {
        let update = prepare_for_update(patch);
        let university = self.storage.update_one(&filter, &update).await?;
        tracing::info!(
            id = %university.id,
            filter = %filter,
            fields = ?update.changed_fields(),
            "university updated"
        );
        Ok(university)
    }

    pub async fn get_university(
        &self,
        filter: &UniversityFilter,
    ) -> Result<Option<University>, ServiceError> {
        Ok(self.storage.get(filter).await?)
    }

    pub async fn list_universities(&self, limit: usize) -> Result<Vec<University>, ServiceError> {
        Ok(self.storage.list(limit).await?)
    }

    pub async fn count_universities(&self) -> Result<usize, ServiceError> {
        Ok(self.storage.count().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use unidir_core::{CONTACT_VALUE_REQUIRED, Contact, NAME_REQUIRED};

    fn service() -> (UniversityService, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let backend = StorageBackend::new_sqlite(&temp_dir.path().join("svc.db")).unwrap();
        (UniversityService::new(Arc::new(backend)), temp_dir)
    }

    #[tokio::test]
    async fn create_derives_slug() {
        let (svc, _dir) = service();
        let created = svc
            .create_university(NewUniversity::new("Boston University", "d", "a"))
            .await
            .unwrap();
        assert_eq!(created.slug, "boston-university");
    }

    #[tokio::test]
    async fn invalid_candidate_never_reaches_storage() {
        let (svc, _dir) = service();
        let err = svc.create_university(NewUniversity::new("", "d", "a")).await.unwrap_err();
        assert!(err.is_validation());
        match err {
            ServiceError::Validation(v) => assert_eq!(v.first().message, NAME_REQUIRED),
            other => panic!("expected validation failure, got {other}"),
        }
        assert_eq!(svc.count_universities().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_contact_value_rejected_before_write() {
        let (svc, _dir) = service();
        let err = svc
            .create_university(NewUniversity::new("Tufts", "d", "a").contact("email", ""))
            .await
            .unwrap_err();
        let ServiceError::Validation(v) = err else { panic!("expected validation failure") };
        assert_eq!(v.first().field, "contacts[0].value");
        assert_eq!(v.first().message, CONTACT_VALUE_REQUIRED);
        assert!(v.has_field("contacts[0].value"));
        assert!(!v.has_field("name"));
        assert_eq!(svc.count_universities().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn normalized_name_collision_is_duplicate_not_validation() {
        let (svc, _dir) = service();
        svc.create_university(NewUniversity::new("A B", "d", "a")).await.unwrap();
        let err = svc.create_university(NewUniversity::new("a-b", "d", "a")).await.unwrap_err();
        assert!(err.is_duplicate());
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn rename_moves_slug_and_other_updates_keep_it() {
        let (svc, _dir) = service();
        let created = svc
            .create_university(
                NewUniversity::new("Old Name", "d", "a").contact("website", "https://old.edu"),
            )
            .await
            .unwrap();

        let renamed = svc
            .update_university(
                UniversityFilter::Id(created.id.clone()),
                UniversityPatch::default().name("New Name"),
            )
            .await
            .unwrap();
        assert_eq!(renamed.slug, "new-name");
        assert_eq!(renamed.contacts, vec![Contact::new("website", "https://old.edu")]);

        let repriced = svc
            .update_university(
                UniversityFilter::Slug("new-name".to_owned()),
                UniversityPatch::default().fees(50_000.0),
            )
            .await
            .unwrap();
        assert_eq!(repriced.slug, "new-name");
        assert_eq!(repriced.fees, Some(50_000.0));
    }

    #[tokio::test]
    async fn update_unknown_record_is_not_found() {
        let (svc, _dir) = service();
        let err = svc
            .update_university(
                UniversityFilter::Slug("ghost".to_owned()),
                UniversityPatch::default().fees(1.0),
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_transient());
    }
}
