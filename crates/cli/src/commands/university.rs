use anyhow::Result;
use unidir_core::{NewUniversity, UniversityFilter, UniversityPatch};
use unidir_service::UniversityService;

use crate::OptionalFields;

pub(crate) fn build_candidate(
    name: String,
    description: String,
    address: String,
    fields: OptionalFields,
) -> NewUniversity {
    NewUniversity {
        name,
        description,
        address,
        contacts: fields.contact,
        avg_gre: fields.avg_gre,
        avg_lang: fields.avg_lang,
        fees: fields.fees,
    }
}

/// Only flags the user passed end up in the patch; repeated `--contact`
/// flags replace the whole list.
pub(crate) fn build_patch(
    name: Option<String>,
    description: Option<String>,
    address: Option<String>,
    clear_contacts: bool,
    fields: OptionalFields,
) -> UniversityPatch {
    let contacts = if clear_contacts {
        Some(Vec::new())
    } else if fields.contact.is_empty() {
        None
    } else {
        Some(fields.contact)
    };
    UniversityPatch {
        name,
        description,
        address,
        contacts,
        avg_gre: fields.avg_gre,
        avg_lang: fields.avg_lang,
        fees: fields.fees,
    }
}

pub(crate) async fn run_create(service: &UniversityService, candidate: NewUniversity) -> Result<()> {
    let university = service.create_university(candidate).await?;
    println!("{}", serde_json::to_string_pretty(&university)?);
    Ok(())
}

pub(crate) async fn run_update(
    service: &UniversityService,
    filter: UniversityFilter,
    patch: UniversityPatch,
) -> Result<()> {
    let university = service.update_university(filter, patch).await?;
    println!("{}", serde_json::to_string_pretty(&university)?);
    Ok(())
}

pub(crate) async fn run_get(service: &UniversityService, filter: &UniversityFilter) -> Result<()> {
    match service.get_university(filter).await? {
        Some(university) => println!("{}", serde_json::to_string_pretty(&university)?),
        None => println!("University not found: {filter}"),
    }
    Ok(())
}

pub(crate) async fn run_list(service: &UniversityService, limit: usize) -> Result<()> {
    let universities = service.list_universities(limit).await?;
    println!("{}", serde_json::to_string_pretty(&universities)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use unidir_core::Contact;

    fn fields(contact: Vec<Contact>) -> OptionalFields {
        OptionalFields { contact, avg_gre: None, avg_lang: None, fees: Some(9.5) }
    }

    #[test]
    fn patch_without_contact_flags_leaves_contacts_alone() {
        let patch = build_patch(None, None, None, false, fields(Vec::new()));
        assert_eq!(patch.contacts, None);
        assert_eq!(patch.fees, Some(9.5));
        assert_eq!(patch.name, None);
    }

    #[test]
    fn clear_contacts_sends_empty_list() {
        let patch = build_patch(None, None, None, true, fields(Vec::new()));
        assert_eq!(patch.contacts, Some(Vec::new()));
    }

    #[test]
    fn contact_flags_replace_list() {
        let patch = build_patch(
            Some("New".to_owned()),
            None,
            None,
            false,
            fields(vec![Contact::new("phone", "1")]),
        );
        assert_eq!(patch.contacts, Some(vec![Contact::new("phone", "1")]));
        assert_eq!(patch.name.as_deref(), Some("New"));
    }
}
