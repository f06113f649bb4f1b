//! Write-ready shapes produced by the lifecycle functions.

use serde::{Deserialize, Serialize};

use super::Contact;

/// A validated candidate with its slug derived, ready for `create`.
///
/// Only [`crate::prepare_for_create`] builds one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct PreparedUniversity {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub address: String,
    pub contacts: Vec<Contact>,
    pub avg_gre: Option<f64>,
    pub avg_lang: Option<f64>,
    pub fees: Option<f64>,
}

impl PreparedUniversity {
    #[allow(clippy::too_many_arguments, reason = "crate-internal constructor")]
    pub(crate) const fn new(
        name: String,
        slug: String,
        description: String,
        address: String,
        contacts: Vec<Contact>,
        avg_gre: Option<f64>,
        avg_lang: Option<f64>,
        fees: Option<f64>,
    ) -> Self {
        Self { name, slug, description, address, contacts, avg_gre, avg_lang, fees }
    }
}

/// Effective update set handed to `update_one`: the caller's patch plus
/// any derived fields. Absent fields are left untouched by storage and are
/// omitted when serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct UniversityUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_gre: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_lang: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<f64>,
}

impl UniversityUpdate {
    /// True when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.address.is_none()
            && self.contacts.is_none()
            && self.avg_gre.is_none()
            && self.avg_lang.is_none()
            && self.fees.is_none()
    }

    /// Names of the fields this update sets, in column order.
    #[must_use]
    pub fn changed_fields(&self) -> Vec<&'static str> {
        let present = [
            ("name", self.name.is_some()),
            ("slug", self.slug.is_some()),
            ("description", self.description.is_some()),
            ("address", self.address.is_some()),
            ("contacts", self.contacts.is_some()),
            ("avg_gre", self.avg_gre.is_some()),
            ("avg_lang", self.avg_lang.is_some()),
            ("fees", self.fees.is_some()),
        ];
        present.into_iter().filter_map(|(field, set)| set.then_some(field)).collect()
    }
}
