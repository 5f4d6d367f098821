use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::store::DEFAULT_DATA_DIR;

#[derive(Parser, Debug)]
#[command(name = "rusty-phonebook", version, about = "Simple Phonebook")]
pub struct Cli {
    /// Storage choice (mem, json) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    /// Directory holding the saved contact list
    #[arg(long, env = "PHONEBOOK_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name, must not match an existing name ignoring case
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        number: String,
    },
    /// List contacts, newest first
    List {
        /// Only show contacts whose name contains this text (case-insensitive)
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Delete a contact by id
    Delete {
        /// Id of the contact to delete, as shown by `list`
        #[arg(long)]
        id: String,
    },

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<String>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<String>,
    },
}
