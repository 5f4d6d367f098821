use super::*;
use super::contact::normalize;

/// Contacts whose name contains `filter`, ignoring case, in list order.
/// An empty filter keeps every contact.
pub fn filter_by_name<'a>(contact_list: &'a [Contact], filter: &str) -> Vec<&'a Contact> {
    let normalized_filter = normalize(filter);

    contact_list
        .iter()
        .filter(|c| c.normalized_name().contains(normalized_filter.as_str()))
        .collect()
}
