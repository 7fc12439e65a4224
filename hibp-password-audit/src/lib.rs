//! Interactive password audit: breach counts from the Have I Been Pwned range
//! API plus a fixed-rule strength label, for one password or a whole file.
//!
//! File mode writes `relatorio.csv` with one row per checked password:
//!
//! ```text
//! Senha,Vazamentos encontrados,Força da Senha
//! 123456,3000000,Fraca
//! Password1@,0,Forte
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod messages;
pub mod report;
pub mod strength;

pub use batch::{BatchOutcome, check_password, parse_passwords, process_file};
pub use config::{Config, Mode};
pub use error::Error;
pub use report::{DEFAULT_REPORT_PATH, REPORT_HEADER, ResultRecord, write_report};
pub use strength::{Strength, classify};
