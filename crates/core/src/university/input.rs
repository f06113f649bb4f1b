//! Caller-supplied input for creating and changing universities.

use serde::{Deserialize, Serialize};

use super::Contact;

/// Candidate record for creation. Fields are plain strings so that missing
/// values can be reported as validation failures instead of parse errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewUniversity {
    pub name: String,
    pub description: String,
    pub address: String,
    pub contacts: Vec<Contact>,
    pub avg_gre: Option<f64>,
    pub avg_lang: Option<f64>,
    pub fees: Option<f64>,
}

impl NewUniversity {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            address: address.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn contact(mut self, contact_type: impl Into<String>, value: impl Into<String>) -> Self {
        self.contacts.push(Contact::new(contact_type, value));
        self
    }

    #[must_use]
    pub const fn avg_gre(mut self, avg_gre: f64) -> Self {
        self.avg_gre = Some(avg_gre);
        self
    }

    #[must_use]
    pub const fn avg_lang(mut self, avg_lang: f64) -> Self {
        self.avg_lang = Some(avg_lang);
        self
    }

    #[must_use]
    pub const fn fees(mut self, fees: f64) -> Self {
        self.fees = Some(fees);
        self
    }
}

/// Partial change set: only the fields the caller intends to change.
///
/// `contacts`, when present, replaces the whole list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UniversityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_gre: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_lang: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees: Option<f64>,
}

impl UniversityPatch {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    #[must_use]
    pub fn contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = Some(contacts);
        self
    }

    #[must_use]
    pub const fn avg_gre(mut self, avg_gre: f64) -> Self {
        self.avg_gre = Some(avg_gre);
        self
    }

    #[must_use]
    pub const fn avg_lang(mut self, avg_lang: f64) -> Self {
        self.avg_lang = Some(avg_lang);
        self
    }

    #[must_use]
    pub const fn fees(mut self, fees: f64) -> Self {
        self.fees = Some(fees);
        self
    }
}
