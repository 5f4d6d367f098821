pub mod command;
pub mod run;

pub use run::{display_contact, run, run_app};
