use super::*;

use std::collections::HashSet;

/// Owns the in-memory contact list, the current name filter and the
/// backing store the list is synchronized with.
///
/// The list is newest-first and never holds two names that are equal
/// ignoring case.
pub struct ContactStore {
    mem: Vec<Contact>,
    filter: String,
    storage: Box<dyn KeyValueStore>,
}

/// Outcome of [`ContactStore::import_contacts`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    /// Names already in contacts, in file order.
    pub skipped: Vec<String>,
    /// Rows with a blank name or number.
    pub invalid: usize,
}

impl ContactStore {
    /// Builds a store around `storage` and hydrates it with whatever the
    /// storage currently holds.
    pub fn new(storage: Box<dyn KeyValueStore>) -> Self {
        let mut manager = Self {
            mem: Vec::new(),
            filter: String::new(),
            storage,
        };
        manager.mem = manager.load();

        debug!(
            medium = manager.storage.medium(),
            total = manager.mem.len(),
            "contact store ready"
        );
        manager
    }

    /// Reads the persisted list, falling back to an empty one.
    pub fn load(&self) -> Vec<Contact> {
        load_contacts(self.storage.as_ref())
    }

    pub fn persist(&mut self) -> Result<(), AppError> {
        persist_contacts(self.storage.as_mut(), &self.mem)
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.id == id)
    }

    pub fn name_exists(&self, name: &str) -> bool {
        self.mem.iter().any(|c| c.has_name(name))
    }

    /// Adds a new contact at the head of the list and saves the list.
    ///
    /// Fails with [`AppError::DuplicateName`] when a contact with the same
    /// name (ignoring case) exists; the list is left untouched in that case.
    pub fn add(&mut self, name: String, number: String) -> Result<Contact, AppError> {
        let new_contact = Contact::new(name, number);
        new_contact.validate()?;

        if self.name_exists(&new_contact.name) {
            return Err(AppError::DuplicateName(new_contact.name));
        }

        self.mem.insert(0, new_contact.clone());
        self.persist()?;

        Ok(new_contact)
    }

    /// Removes the contact with `id` and saves the list. Unknown ids are a
    /// no-op and return `None`.
    pub fn delete(&mut self, id: &str) -> Result<Option<Contact>, AppError> {
        let removed = self
            .mem
            .iter()
            .position(|c| c.id == id)
            .map(|index| self.mem.remove(index));

        self.persist()?;
        Ok(removed)
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Contacts passing the current filter.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        filter_by_name(&self.mem, &self.filter)
    }

    /// Adds every record the way [`ContactStore::add`] would, skipping
    /// names already present and incomplete rows, and saves once at the end.
    ///
    /// A record keeps its id unless that id is blank or already taken.
    pub fn import_contacts(&mut self, records: Vec<Contact>) -> Result<ImportReport, AppError> {
        let mut report = ImportReport::default();
        let mut ids: HashSet<String> = self.mem.iter().map(|c| c.id.clone()).collect();

        for mut record in records {
            if record.validate().is_err() {
                report.invalid += 1;
                continue;
            }

            if self.name_exists(&record.name) {
                report.skipped.push(record.name);
                continue;
            }

            if record.id.trim().is_empty() || ids.contains(&record.id) {
                record.id = contact::generate_id();
            }
            ids.insert(record.id.clone());

            self.mem.insert(0, record);
            report.imported += 1;
        }

        if report.imported > 0 {
            self.persist()?;
        }

        debug!(
            imported = report.imported,
            skipped = report.skipped.len(),
            invalid = report.invalid,
            "imported contacts"
        );
        Ok(report)
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn into_backend(self) -> Box<dyn KeyValueStore> {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{file::FileStore, memory::MemStore};

    fn empty_store() -> ContactStore {
        ContactStore::new(Box::new(MemStore::new()))
    }

    fn seeded_store() -> Result<ContactStore, AppError> {
        let mut storage = empty_store();
        storage.add("Rosie Simpson".to_string(), "459-12-56".to_string())?;
        storage.add("Hermione Kline".to_string(), "443-89-12".to_string())?;
        storage.add("Eden Clements".to_string(), "645-17-79".to_string())?;
        Ok(storage)
    }

    #[test]
    fn added_contact_is_first_in_unfiltered_view() -> Result<(), AppError> {
        let mut storage = seeded_store()?;

        let anna = storage.add("Anna".to_string(), "227-91-26".to_string())?;

        let everything = filter_by_name(storage.contact_list(), "");
        assert_eq!(everything.len(), 4);
        assert_eq!(everything[0], &anna);
        assert_eq!(storage.visible_contacts()[0], &anna);
        Ok(())
    }

    #[test]
    fn duplicate_name_in_other_case_is_rejected() -> Result<(), AppError> {
        let mut storage = seeded_store()?;
        let before = storage.contact_list().to_vec();

        let result = storage.add("rosie SIMPSON".to_string(), "000-00-00".to_string());

        match result {
            Err(AppError::DuplicateName(name)) => assert_eq!(name, "rosie SIMPSON"),
            other => panic!("expected duplicate name error, got {:?}", other),
        }
        assert_eq!(storage.contact_list(), before.as_slice());
        Ok(())
    }

    #[test]
    fn blank_name_is_rejected_without_mutation() {
        let mut storage = empty_store();

        let result = storage.add("  ".to_string(), "459-12-56".to_string());

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(storage.is_empty());
    }

    #[test]
    fn delete_removes_one_entry_and_is_idempotent() -> Result<(), AppError> {
        let mut storage = seeded_store()?;
        let id = storage.contact_list()[1].id.clone();

        let removed = storage.delete(&id)?;
        assert_eq!(removed.map(|c| c.name), Some("Hermione Kline".to_string()));
        assert_eq!(storage.len(), 2);
        assert!(storage.get(&id).is_none());

        assert_eq!(storage.delete(&id)?, None);
        assert_eq!(storage.len(), 2);
        Ok(())
    }

    #[test]
    fn delete_unknown_id_is_noop() -> Result<(), AppError> {
        let mut storage = seeded_store()?;
        let before = storage.contact_list().to_vec();

        assert_eq!(storage.delete("no-such-id")?, None);
        assert_eq!(storage.contact_list(), before.as_slice());
        Ok(())
    }

    #[test]
    fn filter_is_kept_on_the_store() -> Result<(), AppError> {
        let mut storage = empty_store();
        storage.add("Bob".to_string(), "1".to_string())?;
        storage.add("Anna".to_string(), "2".to_string())?;

        storage.set_filter("AN");
        assert_eq!(storage.filter(), "AN");

        let visible: Vec<&str> = storage
            .visible_contacts()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(visible, vec!["Anna"]);

        storage.set_filter("");
        assert_eq!(storage.visible_contacts().len(), 2);
        Ok(())
    }

    #[test]
    fn mutations_are_saved_and_reloaded_in_order() -> Result<(), AppError> {
        let storage = seeded_store()?;
        let saved = storage.contact_list().to_vec();

        let reopened = ContactStore::new(storage.into_backend());

        assert_eq!(reopened.contact_list(), saved.as_slice());
        assert_eq!(reopened.contact_list()[0].name, "Eden Clements");
        Ok(())
    }

    #[test]
    fn deleting_last_contact_leaves_saved_list_in_place() -> Result<(), AppError> {
        let mut storage = empty_store();
        let anna = storage.add("Anna".to_string(), "1".to_string())?;

        storage.delete(&anna.id)?;
        assert!(storage.is_empty());

        // the empty list was not written, so the old one comes back
        let reopened = ContactStore::new(storage.into_backend());
        assert_eq!(reopened.contact_list(), &[anna]);
        Ok(())
    }

    #[test]
    fn malformed_backend_data_starts_empty() -> Result<(), AppError> {
        let mut backend = MemStore::new();
        backend.set(STORAGE_KEY, "[{\"id\":")?;

        let storage = ContactStore::new(Box::new(backend));

        assert!(storage.is_empty());
        assert_eq!(
            storage.backend().get(STORAGE_KEY)?,
            Some("[{\"id\":".to_string())
        );
        Ok(())
    }

    #[test]
    fn import_skips_existing_and_repeated_names() -> Result<(), AppError> {
        let mut storage = seeded_store()?;
        let taken_id = storage.contact_list()[0].id.clone();

        let records = vec![
            Contact {
                id: taken_id.clone(),
                name: "Annie Copeland".to_string(),
                number: "227-91-26".to_string(),
            },
            Contact::new("EDEN CLEMENTS".to_string(), "1".to_string()),
            Contact::new("annie copeland".to_string(), "2".to_string()),
            Contact::new("".to_string(), "3".to_string()),
        ];

        let report = storage.import_contacts(records)?;

        assert_eq!(report.imported, 1);
        assert_eq!(report.invalid, 1);
        assert_eq!(
            report.skipped,
            vec!["EDEN CLEMENTS".to_string(), "annie copeland".to_string()]
        );

        let annie = &storage.contact_list()[0];
        assert_eq!(annie.name, "Annie Copeland");
        assert_ne!(annie.id, taken_id);
        assert_eq!(storage.len(), 4);
        Ok(())
    }

    #[test]
    fn unreadable_and_unwritable_backend() -> Result<(), AppError> {
        let dir = tempfile::tempdir()?;
        // a directory where the contacts file should be fails both reads and writes
        std::fs::create_dir(dir.path().join("contacts.json"))?;

        let mut storage = ContactStore::new(Box::new(FileStore::new(dir.path())));
        assert!(storage.is_empty());

        let result = storage.add("Anna".to_string(), "459-12-56".to_string());
        assert!(matches!(result, Err(AppError::Io(_))));

        // the save failed after the contact was already added in memory
        assert_eq!(storage.len(), 1);
        assert!(storage.name_exists("anna"));

        let bob = storage.add("Bob".to_string(), "443-89-12".to_string());
        assert!(matches!(bob, Err(AppError::Io(_))));
        assert_eq!(storage.len(), 2);

        let anna_id = storage.contact_list()[1].id.clone();
        assert!(matches!(storage.delete(&anna_id), Err(AppError::Io(_))));
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.contact_list()[0].name, "Bob");
        Ok(())
    }
}
