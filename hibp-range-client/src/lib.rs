//! Breached password lookups against the Have I Been Pwned range API.
//!
//! The API implements k-anonymity: the client hashes the password with SHA1,
//! sends only the first 5 hex characters of the digest to
//! `https://api.pwnedpasswords.com/range/{prefix}`, and receives every known
//! suffix sharing that prefix as `SUFFIX:COUNT` lines. The full hash is matched
//! locally, so neither the password nor its complete hash leaves the machine.
//!
//! ```no_run
//! use hibp_range_client::{BreachLookup, RangeClient};
//!
//! # async fn run() -> Result<(), hibp_range_client::Error> {
//! let client = RangeClient::new()?;
//! let count = client.leak_count("password123").await?;
//! println!("seen {count} times");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod digest;
pub mod error;
pub mod response;

pub use client::{ADD_PADDING_HEADER, BreachLookup, DEFAULT_API_URL, RangeClient};
pub use digest::{HEX_LEN, PREFIX_LEN, PasswordDigest, SUFFIX_LEN, digest};
pub use error::Error;
pub use response::find_suffix_count;

/// Environment variable overriding the range API base URL.
pub const HIBP_API_URL_ENV: &str = "HIBP_API_URL";
