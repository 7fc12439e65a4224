use std::fmt;

use sha1::{Digest, Sha1};

/// The length of a SHA1 hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the suffix matched locally against the range response.
pub const SUFFIX_LEN: usize = HEX_LEN - PREFIX_LEN;

/// Length of a SHA1 hash rendered as hex.
pub const HEX_LEN: usize = 40;

/// Hex lookup table, uppercase to match the range API.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hex SHA1 of a password, stored inline.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordDigest {
    hex: [u8; HEX_LEN],
}

impl PasswordDigest {
    /// First 5 hex characters, the only part that leaves the machine.
    pub fn prefix(&self) -> &str {
        &self.as_str()[..PREFIX_LEN]
    }

    /// Remaining 35 hex characters.
    pub fn suffix(&self) -> &str {
        &self.as_str()[PREFIX_LEN..]
    }

    pub fn as_str(&self) -> &str {
        // SAFETY: every byte is taken from HEX_CHARS
        unsafe { std::str::from_utf8_unchecked(&self.hex) }
    }
}

impl fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Prints only the prefix so a digest never ends up whole in logs.
impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PasswordDigest({}...)", self.prefix())
    }
}

/// Computes the uppercase hex SHA1 of the password's UTF-8 bytes.
///
/// Total over all inputs; the empty string hashes like any other.
pub fn digest(password: &str) -> PasswordDigest {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    let hash: [u8; 20] = hasher.finalize().into();

    let mut hex = [0u8; HEX_LEN];
    for (i, byte) in hash.iter().enumerate() {
        hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
        hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
    }

    PasswordDigest { hex }
}
