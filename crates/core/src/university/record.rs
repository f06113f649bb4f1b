//! Persisted university record.

use serde::{Deserialize, Serialize};

/// One way of reaching a university (website, phone, email, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// Kind of contact, e.g. "website" or "phone"
    #[serde(rename = "type")]
    pub contact_type: String,
    /// The contact itself
    pub value: String,
}

impl Contact {
    #[must_use]
    pub fn new(contact_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self { contact_type: contact_type.into(), value: value.into() }
    }
}

/// A stored university.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct University {
    /// Storage-generated identifier, immutable
    pub id: String,
    /// Display name, unique
    pub name: String,
    /// Derived from `name`, unique
    pub slug: String,
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    /// Average GRE score required for acceptance
    pub avg_gre: Option<f64>,
    /// Average language test (TOEFL/IELTS) score required for acceptance
    pub avg_lang: Option<f64>,
    pub fees: Option<f64>,
}

impl University {
    /// Assembles a record from stored columns.
    #[must_use]
    #[allow(clippy::too_many_arguments, reason = "mirrors the stored row")]
    pub fn new(
        id: String,
        name: String,
        slug: String,
        description: String,
        address: String,
        contacts: Vec<Contact>,
        avg_gre: Option<f64>,
        avg_lang: Option<f64>,
        fees: Option<f64>,
    ) -> Self {
        Self { id, name, slug, description, address, contacts, avg_gre, avg_lang, fees }
    }
}
