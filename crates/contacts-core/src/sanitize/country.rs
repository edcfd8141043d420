use contacts_model::CountryAllowList;

use super::clean_value;

/// Returns the cleaned country name when it is on the allow-list, else `""`.
///
/// Matching is exact after trimming; `honduras` is not `Honduras`.
pub fn validate_country(raw: &str, allow_list: &CountryAllowList) -> String {
    let cleaned = clean_value(raw);
    if allow_list.contains(&cleaned) {
        cleaned
    } else {
        String::new()
    }
}
