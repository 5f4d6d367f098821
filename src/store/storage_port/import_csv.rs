use std::path::PathBuf;

use super::*;
use csv::Reader;

const IMPORT_PATH: &str = "./import_export/contacts.csv";

/// Reads contact records from a `.csv` file with an `id,name,number`
/// header. The `id` column may be left out.
pub fn read_contacts_from_csv(src: Option<&str>) -> Result<(PathBuf, Vec<Contact>), AppError> {
    let mut file_path: PathBuf = PathBuf::from(IMPORT_PATH);

    if let Some(path) = src {
        file_path = PathBuf::from(path);
    }

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if file_path.extension().is_none_or(|ext| ext != "csv") {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: Contact = result?;
        records.push(record);
    }

    Ok((file_path, records))
}
