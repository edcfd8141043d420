use serde::{Deserialize, Serialize};

/// Export column names in GHL import order.
pub const CONTACT_HEADERS: [&str; 16] = [
    "First Name",
    "Last Name",
    "Email",
    "Phone",
    "Additional Phone Numbers",
    "Additional Email Addresses",
    "Country",
    "Address",
    "Website",
    "Facebook",
    "Instagram",
    "LinkedIn",
    "WhatsApp",
    "Carreras",
    "Notas",
    "Tags",
];

/// A sanitized contact ready for export.
///
/// Every field is always present; `""` is the only representation of a
/// missing value. Field declaration order is the export column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedContact {
    #[serde(rename = "First Name")]
    pub first_name: String,
    #[serde(rename = "Last Name")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Additional Phone Numbers")]
    pub additional_phone: String,
    #[serde(rename = "Additional Email Addresses")]
    pub additional_email: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "Website")]
    pub website: String,
    #[serde(rename = "Facebook")]
    pub facebook: String,
    #[serde(rename = "Instagram")]
    pub instagram: String,
    #[serde(rename = "LinkedIn")]
    pub linkedin: String,
    #[serde(rename = "WhatsApp")]
    pub whatsapp: String,
    #[serde(rename = "Carreras")]
    pub careers: String,
    #[serde(rename = "Notas")]
    pub notes: String,
    #[serde(rename = "Tags")]
    pub tags: String,
}

impl NormalizedContact {
    /// Field values in export column order.
    pub fn fields(&self) -> [&str; 16] {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.additional_phone,
            &self.additional_email,
            &self.country,
            &self.address,
            &self.website,
            &self.facebook,
            &self.instagram,
            &self.linkedin,
            &self.whatsapp,
            &self.careers,
            &self.notes,
            &self.tags,
        ]
    }
}
