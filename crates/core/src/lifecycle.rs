//! Write-path preparation: validation and slug maintenance.
//!
//! Every create goes through [`prepare_for_create`] and every update through
//! [`prepare_for_update`] before reaching storage. Uniqueness of `name` and
//! `slug` is not checked here; storage reports it as a duplicate-key failure.

use crate::{
    derive_slug, Contact, FieldViolation, NewUniversity, PreparedUniversity, UniversityPatch,
    UniversityUpdate, ValidationError,
};

pub const NAME_REQUIRED: &str = "Please provide a display name for university";
pub const DESCRIPTION_REQUIRED: &str = "Please provide a description for the university";
pub const ADDRESS_REQUIRED: &str = "Please provide an address for the university";
pub const CONTACT_TYPE_REQUIRED: &str = "Please provide the type of contact";
pub const CONTACT_VALUE_REQUIRED: &str = "Please provide the actual contact";

/// Validate a candidate and derive its slug.
///
/// Checks run in a fixed order (`name`, `description`, `address`, then each
/// contact's `type` and `value`) and every unmet constraint is reported.
///
/// # Errors
/// Returns [`ValidationError`] listing the unmet constraints in check order.
pub fn prepare_for_create(candidate: NewUniversity) -> Result<PreparedUniversity, ValidationError> {
    let mut violations = Vec::new();
    require(&mut violations, "name", &candidate.name, NAME_REQUIRED);
    require(&mut violations, "description", &candidate.description, DESCRIPTION_REQUIRED);
    require(&mut violations, "address", &candidate.address, ADDRESS_REQUIRED);
    check_contacts(&mut violations, &candidate.contacts);

    if let Some(err) = ValidationError::from_violations(violations) {
        tracing::debug!(violations = err.violations().len(), "rejected university candidate");
        return Err(err);
    }

    let NewUniversity { name, description, address, contacts, avg_gre, avg_lang, fees } =
        candidate;
    let slug = derive_slug(&name);
    Ok(PreparedUniversity::new(name, slug, description, address, contacts, avg_gre, avg_lang, fees))
}

/// Turn a caller's patch into the effective update set.
///
/// A non-empty `name` brings a freshly derived `slug` with it. Without a
/// `name` the slug is left alone. An empty `name` is passed through as-is
/// with no slug recomputation.
#[must_use]
pub fn prepare_for_update(patch: UniversityPatch) -> UniversityUpdate {
    let UniversityPatch { name, description, address, contacts, avg_gre, avg_lang, fees } = patch;

    let slug = match name.as_deref() {
        Some("") => {
            tracing::warn!("update sets an empty name; slug left unchanged");
            None
        },
        Some(name) => Some(derive_slug(name)),
        None => None,
    };

    UniversityUpdate { name, slug, description, address, contacts, avg_gre, avg_lang, fees }
}

fn require(violations: &mut Vec<FieldViolation>, field: &str, value: &str, message: &str) {
    if value.is_empty() {
        violations.push(FieldViolation::new(field, message));
    }
}

fn check_contacts(violations: &mut Vec<FieldViolation>, contacts: &[Contact]) {
    for (i, contact) in contacts.iter().enumerate() {
        require(
            violations,
            &format!("contacts[{i}].type"),
            &contact.contact_type,
            CONTACT_TYPE_REQUIRED,
        );
        require(violations, &format!("contacts[{i}].value"), &contact.value, CONTACT_VALUE_REQUIRED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> NewUniversity {
        NewUniversity::new("Boston University", "d", "a")
    }

    #[test]
    fn create_derives_slug() {
        let prepared = prepare_for_create(valid()).unwrap();
        assert_eq!(prepared.slug, "boston-university");
        assert_eq!(prepared.name, "Boston University");
    }

    #[test]
    fn create_collapses_irregular_whitespace() {
        let prepared = prepare_for_create(NewUniversity::new("MIT   Sloan", "d", "a")).unwrap();
        assert_eq!(prepared.slug, "mit-sloan");
    }

    #[test]
    fn create_keeps_optional_fields() {
        let prepared = prepare_for_create(
            valid().contact("website", "https://bu.edu").avg_gre(320.0).avg_lang(7.5).fees(58_000.0),
        )
        .unwrap();
        assert_eq!(prepared.contacts, vec![Contact::new("website", "https://bu.edu")]);
        assert_eq!(prepared.avg_gre, Some(320.0));
        assert_eq!(prepared.avg_lang, Some(7.5));
        assert_eq!(prepared.fees, Some(58_000.0));
    }

    #[test]
    fn create_rejects_each_missing_required_field() {
        let cases = [
            (NewUniversity::new("", "d", "a"), "name", NAME_REQUIRED),
            (NewUniversity::new("n", "", "a"), "description", DESCRIPTION_REQUIRED),
            (NewUniversity::new("n", "d", ""), "address", ADDRESS_REQUIRED),
        ];
        for (candidate, field, message) in cases {
            let err = prepare_for_create(candidate).unwrap_err();
            assert_eq!(err.violations().len(), 1);
            assert_eq!(err.first().field, field);
            assert_eq!(err.first().message, message);
        }
    }

    #[test]
    fn create_reports_violations_in_check_order() {
        let candidate = NewUniversity::default().contact("", "x").contact("phone", "");
        let err = prepare_for_create(candidate).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
        assert_eq!(
            fields,
            ["name", "description", "address", "contacts[0].type", "contacts[1].value"]
        );
    }

    #[test]
    fn create_rejects_contact_with_empty_value() {
        let err = prepare_for_create(valid().contact("phone", "")).unwrap_err();
        assert_eq!(err.first().field, "contacts[0].value");
        assert_eq!(err.first().message, CONTACT_VALUE_REQUIRED);
    }

    #[test]
    fn create_accepts_empty_contact_list() {
        assert!(prepare_for_create(valid()).unwrap().contacts.is_empty());
    }

    #[test]
    fn update_with_name_adds_slug() {
        let update = prepare_for_update(UniversityPatch::default().name("New Name"));
        assert_eq!(update.name.as_deref(), Some("New Name"));
        assert_eq!(update.slug.as_deref(), Some("new-name"));
    }

    #[test]
    fn update_without_name_has_no_slug_key() {
        let update = prepare_for_update(UniversityPatch::default().fees(50_000.0));
        assert_eq!(update.slug, None);
        assert_eq!(update.changed_fields(), ["fees"]);

        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("slug").is_none());
        assert_eq!(json["fees"], 50_000.0);
    }

    #[test]
    fn update_with_empty_name_passes_through() {
        let update = prepare_for_update(UniversityPatch::default().name(""));
        assert_eq!(update.name.as_deref(), Some(""));
        assert_eq!(update.slug, None);
    }

    #[test]
    fn empty_patch_is_empty_update() {
        assert!(prepare_for_update(UniversityPatch::default()).is_empty());
    }
}
