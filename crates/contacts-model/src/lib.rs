//! Data model shared by the contact conversion crates.

pub mod contact;
pub mod country;
pub mod record;
pub mod stats;
pub mod tags;

pub use contact::{CONTACT_HEADERS, NormalizedContact};
pub use country::CountryAllowList;
pub use record::{RawRecord, SourceTable};
pub use stats::{CountryCount, PipelineStats, ValidationSummary};
pub use tags::{TAG_SEPARATOR, TagRule, TagSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_cells_read_the_same() {
        let record: RawRecord = [
            ("Nombre_Universidad", Some("UNAH")),
            ("Email_General", Some("")),
            ("País", None),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.get("Nombre_Universidad"), Some("UNAH"));
        assert_eq!(record.get("Email_General"), None);
        assert_eq!(record.get("País"), None);
        assert_eq!(record.get("Facebook"), None);
        assert_eq!(record.value("Facebook"), "");
    }

    #[test]
    fn tag_set_skips_duplicates_and_empties() {
        let mut tags = TagSet::new();
        assert!(tags.push("honduras"));
        assert!(!tags.push(""));
        assert!(tags.push("logistica internacional"));
        assert!(!tags.push("honduras"));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.render(), "honduras, logistica internacional");
        assert!(!tags.is_only("honduras"));
    }

    #[test]
    fn empty_tag_set_renders_empty() {
        assert_eq!(TagSet::new().render(), "");
    }

    #[test]
    fn contact_fields_follow_header_order() {
        let contact = NormalizedContact {
            first_name: "UNAH".to_string(),
            tags: "honduras".to_string(),
            ..NormalizedContact::default()
        };
        let fields = contact.fields();
        assert_eq!(fields.len(), CONTACT_HEADERS.len());
        assert_eq!(fields[0], "UNAH");
        assert_eq!(fields[15], "honduras");

        let json = serde_json::to_value(&contact).expect("serialize contact");
        assert_eq!(json["First Name"], "UNAH");
        assert_eq!(json["Additional Phone Numbers"], "");
    }

    #[test]
    fn allow_list_is_exact() {
        let countries = CountryAllowList::new(["Honduras", "Mexico"]);
        assert!(countries.contains("Honduras"));
        assert!(!countries.contains("honduras"));
        assert!(!countries.contains("México"));
    }
}
