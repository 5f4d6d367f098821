use super::*;

/// Slot in the backing store holding the serialized contact list.
pub const STORAGE_KEY: &str = "contacts";

/// Reads the persisted contact list.
///
/// Never fails: a missing slot, a `null` payload, malformed JSON or a
/// backend read error all yield an empty list.
pub fn load_contacts(backend: &dyn KeyValueStore) -> Vec<Contact> {
    let data = match backend.get(STORAGE_KEY) {
        Ok(Some(data)) => data,
        Ok(None) => return Vec::new(),
        Err(err) => {
            warn!(medium = backend.medium(), error = %err, "could not read saved contacts");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Option<Vec<Contact>>>(&data) {
        Ok(contacts) => contacts.unwrap_or_default(),
        Err(err) => {
            warn!(medium = backend.medium(), error = %err, "discarding malformed saved contacts");
            Vec::new()
        }
    }
}

/// Writes the contact list to the backing store.
///
/// An empty list is never written, so whatever was saved before stays in
/// place. Deleting the last contact therefore leaves the previous list on
/// disk.
pub fn persist_contacts(
    backend: &mut dyn KeyValueStore,
    contacts: &[Contact],
) -> Result<(), AppError> {
    if contacts.is_empty() {
        debug!(medium = backend.medium(), "contact list is empty, skipping save");
        return Ok(());
    }

    let json_contacts = serde_json::to_string(contacts)?;
    backend.set(STORAGE_KEY, &json_contacts)?;

    debug!(
        medium = backend.medium(),
        total = contacts.len(),
        "saved contacts"
    );
    Ok(())
}
