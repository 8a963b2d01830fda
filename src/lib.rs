//! Turns the curated airdrop campaign catalogue into a SQL seed script.
//!
//! The catalogue is fixed data embedded in the crate (`data/`), split into a
//! protocol-native ("web3") and an exchange-native ("cex") partition. A run
//! loads it, renders one `TRUNCATE` plus one `INSERT` per record followed by
//! verification and statistics queries, and writes the result to
//! `migrations/seed_airdrops.sql` for execution against the database.
//!
//! ```no_run
//! # fn example() -> airdrop_seeder::Result<()> {
//! use airdrop_seeder::{render_seed_script, write_script, Catalog};
//!
//! let catalog = Catalog::builtin()?;
//! let script = render_seed_script(&catalog, chrono::Utc::now())?;
//! write_script(std::path::Path::new("migrations/seed_airdrops.sql"), &script)?;
//! # Ok(())
//! # }
//! ```

pub use catalog::Catalog;
pub use error::{Result, SeederError};
pub use sql::render_seed_script;
pub use writer::write_script;

pub mod catalog;
pub mod error;
pub mod listing;
pub mod model;
pub mod sql;
pub mod writer;
