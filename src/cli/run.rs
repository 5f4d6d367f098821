use crate::prelude::{
    AppError, Contact, ContactStore,
    command::{Cli, Commands},
    store::{
        StorageMedium, parse_store,
        storage_port::{export_contacts_to_csv, read_contacts_from_csv},
    },
};
use clap::Parser;
use dotenv::dotenv;
use tracing::info;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    run(cli)
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    let medium = StorageMedium::from(&cli.storage_choice)?;
    let mut storage = ContactStore::new(parse_store(medium, &cli.data_dir)?);

    info!(
        medium = medium.is_which(),
        data_dir = %cli.data_dir.display(),
        "Current storage choice"
    );

    if medium.is_mem() {
        info!("mem storage keeps contacts for this run only");
    }

    match cli.command {
        Commands::Add { name, number } => {
            let new_contact = storage.add(name, number)?;

            println!("Contact added successfully");
            println!("{}", display_contact(&new_contact));
            Ok(())
        }

        // Listing contacts
        Commands::List { filter } => {
            if storage.is_empty() {
                println!("There is no contacts");
                return Ok(());
            }

            storage.set_filter(filter.unwrap_or_default());

            let filtered_contacts = storage.visible_contacts();
            if filtered_contacts.is_empty() {
                println!("No contact matches \"{}\"", storage.filter());
                return Ok(());
            }

            for (mut i, c) in filtered_contacts.iter().enumerate() {
                i += 1;
                println!("{i:>3}. {}", display_contact(c));
            }
            Ok(())
        }

        // Delete Contact
        Commands::Delete { id } => match storage.delete(&id)? {
            Some(_) => {
                println!("Contact deleted successfully");
                Ok(())
            }
            None => {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                Ok(())
            }
        },

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let (path, records) = read_contacts_from_csv(src.as_deref())?;
            let report = storage.import_contacts(records)?;

            println!(
                "Successfully imported {} contacts from {:?}.",
                report.imported, path
            );

            if !report.skipped.is_empty() {
                println!(
                    "Skipped {} already in contacts: {}",
                    report.skipped.len(),
                    report.skipped.join(", ")
                );
            }

            if report.invalid > 0 {
                println!(
                    "Skipped {} rows with a blank name or number",
                    report.invalid
                );
            }
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = export_contacts_to_csv(storage.contact_list(), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

pub fn display_contact(contact: &Contact) -> String {
    format!("{:<36} {:<20} {}", contact.id, contact.name, contact.number)
}
