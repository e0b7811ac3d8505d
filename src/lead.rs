//! Lead records as the CRM hands them over.
//!
//! The host application stores leads as loosely typed JSON: fields may be
//! missing, `null`, or numbers where strings are expected (zip codes, ids).
//! [`LeadRecord`] accepts all of those and exposes every field as an
//! optional string.

use crate::index::Searchable;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;

/// Field names offered as autocomplete suggestions.
pub const FIELD_NAMES: &[&str] = &["name", "email", "phone", "city", "state", "vendor", "status"];

/// A single lead. Immutable from the search engine's point of view.
///
/// Several fields go by more than one name in CRM exports (`status` and
/// `disposition`, `zip` and `zipCode`, ...). A record may carry both; the
/// canonical key wins and the alias fills in when the canonical one is
/// missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawLead")]
pub struct LeadRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_code: Option<String>,
    /// Lead type, e.g. "Personal Injury"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Disposition in the sales pipeline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Free-text location, e.g. an accident site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Wire shape of a lead: every accepted key, canonical or alias, is its own
/// field so records carrying both never fail as duplicates.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLead {
    #[serde(default, deserialize_with = "lenient_string")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    full_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    first_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    last_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    phone: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    phone_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    city: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    state: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    zip: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    zip_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    vendor_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    lead_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    r#type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    disposition: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    location: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    notes: Option<String>,
}

impl From<RawLead> for LeadRecord {
    fn from(raw: RawLead) -> Self {
        Self {
            id: raw.id,
            name: raw.name.or(raw.full_name),
            first_name: raw.first_name,
            last_name: raw.last_name,
            email: raw.email,
            phone: raw.phone.or(raw.phone_number),
            city: raw.city,
            state: raw.state,
            zip: raw.zip.or(raw.zip_code),
            vendor_code: raw.vendor_code,
            category: raw.category.or(raw.lead_type).or(raw.r#type),
            status: raw.status.or(raw.disposition),
            location: raw.location,
            notes: raw.notes,
        }
    }
}

impl LeadRecord {
    /// Best human-readable name: full name, else first + last, else the id.
    pub fn display_name(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }

        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect();
        if !parts.is_empty() {
            return parts.join(" ");
        }

        self.id.clone().unwrap_or_default()
    }
}

impl Searchable for LeadRecord {
    fn search_key(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.id.as_deref(),
            self.name.as_deref(),
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
            self.phone.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zip.as_deref(),
            self.vendor_code.as_deref(),
            self.category.as_deref(),
            self.status.as_deref(),
            self.location.as_deref(),
            self.notes.as_deref(),
        ]
    }
}

/// Load a JSON array of leads from disk
pub fn load_leads(path: &Path) -> Result<Vec<LeadRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read leads file {}", path.display()))?;
    let leads: Vec<LeadRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse leads file {}", path.display()))?;
    Ok(leads)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Accept strings, numbers, booleans and null for a string field.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Scalar::Text(s) => s,
        Scalar::Integer(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}
