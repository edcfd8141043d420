//! Source column names and the record-to-contact mapping.

use contacts_model::{CountryAllowList, NormalizedContact, RawRecord};

use crate::sanitize::{clean_value, format_phone_e164_strict, normalize_email, validate_country};

pub const NAME: &str = "Nombre_Universidad";
pub const INSTITUTION_TYPE: &str = "Tipo_Institución";
pub const EMAIL: &str = "Email_General";
pub const PHONE: &str = "Teléfono_Principal";
pub const ADMISSIONS_PHONE: &str = "Tel_Admisiones";
pub const RECTOR_EMAIL: &str = "Rector_Email";
pub const COUNTRY: &str = "País";
pub const ADDRESS: &str = "Dirección_Completa";
pub const WEBSITE: &str = "Sitio_Web";
pub const FACEBOOK: &str = "Facebook";
pub const INSTAGRAM: &str = "Instagram";
pub const LINKEDIN: &str = "LinkedIn";
pub const WHATSAPP: &str = "WhatsApp";
pub const CAREERS: &str = "Carreras_Disponibles";
pub const NOTES: &str = "Notas_Adicionales";

/// Every source column the mapping reads, in export order.
pub const SOURCE_COLUMNS: [&str; 15] = [
    NAME,
    INSTITUTION_TYPE,
    EMAIL,
    PHONE,
    ADMISSIONS_PHONE,
    RECTOR_EMAIL,
    COUNTRY,
    ADDRESS,
    WEBSITE,
    FACEBOOK,
    INSTAGRAM,
    LINKEDIN,
    WHATSAPP,
    CAREERS,
    NOTES,
];

/// Reference data the field sanitizers need.
#[derive(Debug, Clone, Copy)]
pub struct MappingContext<'a> {
    pub countries: &'a CountryAllowList,
    pub default_region: &'a str,
}

/// Sanitizes one source row into a contact. Tags are left empty.
///
/// Missing source columns read as empty cells.
pub fn map_record(record: &RawRecord, context: &MappingContext<'_>) -> NormalizedContact {
    let phone = |column: &str| format_phone_e164_strict(record.value(column), context.default_region);
    NormalizedContact {
        first_name: clean_value(record.value(NAME)),
        last_name: clean_value(record.value(INSTITUTION_TYPE)),
        email: normalize_email(record.value(EMAIL)),
        phone: phone(PHONE),
        additional_phone: phone(ADMISSIONS_PHONE),
        additional_email: normalize_email(record.value(RECTOR_EMAIL)),
        country: validate_country(record.value(COUNTRY), context.countries),
        address: clean_value(record.value(ADDRESS)),
        website: clean_value(record.value(WEBSITE)),
        facebook: clean_value(record.value(FACEBOOK)),
        instagram: clean_value(record.value(INSTAGRAM)),
        linkedin: clean_value(record.value(LINKEDIN)),
        whatsapp: phone(WHATSAPP),
        careers: clean_value(record.value(CAREERS)),
        notes: clean_value(record.value(NOTES)),
        tags: String::new(),
    }
}

/// True when the row's email cell held something that sanitized away.
pub fn email_was_cleared(record: &RawRecord, contact: &NormalizedContact) -> bool {
    contact.email.is_empty() && !clean_value(record.value(EMAIL)).is_empty()
}
