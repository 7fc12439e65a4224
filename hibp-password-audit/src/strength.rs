use std::fmt;

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Minimum length, in characters, below which a password is always weak.
pub const MIN_LENGTH: usize = 8;

/// Symbols that count towards a strong password.
pub const SPECIAL_SYMBOLS: &[char] = &['@', '#', '$', '%', '^', '&', '+', '='];

/// Coarse strength label, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    /// Label written to the console and the CSV report.
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Fraca",
            Strength::Moderate => "Moderada",
            Strength::Strong => "Forte",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a password; the first failing rule decides.
///
/// 1. fewer than [`MIN_LENGTH`] characters: weak
/// 2. no decimal digit (any script, category Nd): moderate
/// 3. no uppercase `A-Z`: moderate
/// 4. none of [`SPECIAL_SYMBOLS`]: moderate
/// 5. otherwise strong
pub fn classify(password: &str) -> Strength {
    if password.chars().count() < MIN_LENGTH {
        return Strength::Weak;
    }
    if !password.chars().any(|c| c.general_category() == GeneralCategory::DecimalNumber) {
        return Strength::Moderate;
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Strength::Moderate;
    }
    if !password.chars().any(|c| SPECIAL_SYMBOLS.contains(&c)) {
        return Strength::Moderate;
    }
    Strength::Strong
}
