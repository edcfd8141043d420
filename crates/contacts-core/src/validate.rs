//! Row-level filters applied after sanitization.

use contacts_model::NormalizedContact;

/// Contacts kept by a filter and how many it dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filtered {
    pub kept: Vec<NormalizedContact>,
    pub removed: usize,
}

/// A contact is identifiable when it has a name, an email or a phone.
pub fn has_identifier(contact: &NormalizedContact) -> bool {
    !contact.first_name.is_empty() || !contact.email.is_empty() || !contact.phone.is_empty()
}

pub fn retain_identified(contacts: Vec<NormalizedContact>) -> Filtered {
    let before = contacts.len();
    let kept: Vec<_> = contacts.into_iter().filter(has_identifier).collect();
    Filtered {
        removed: before - kept.len(),
        kept,
    }
}

/// Keeps the first contact per email and returns survivors ordered by email.
///
/// The sort is stable, so among equal emails the earliest input row wins.
/// All contacts without an email share the key `""` and collapse to one.
pub fn dedupe_by_email(mut contacts: Vec<NormalizedContact>) -> Filtered {
    let before = contacts.len();
    contacts.sort_by(|a, b| a.email.cmp(&b.email));
    contacts.dedup_by(|later, earlier| later.email == earlier.email);
    Filtered {
        removed: before - contacts.len(),
        kept: contacts,
    }
}
