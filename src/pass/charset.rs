//! Character classes and the alphabets they draw from.

use std::fmt;

/// One of the four selectable character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    Punctuation,
}

impl CharClass {
    /// Fixed processing order for pool building.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digit,
        CharClass::Punctuation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase",
            CharClass::Lower => "lowercase",
            CharClass::Digit => "digit",
            CharClass::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only alphabet table handed to the pool builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabets<'a> {
    pub upper: &'a str,
    pub lower: &'a str,
    pub digits: &'a str,
    pub punctuation: &'a str,
    pub ambiguous: &'a str,
}

impl Alphabets<'static> {
    pub const STANDARD: Self = Self {
        upper: "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        lower: "abcdefghijklmnopqrstuvwxyz",
        digits: "0123456789",
        punctuation: r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##,
        ambiguous: r#"O0l1I|`'"\"#,
    };
}

impl Default for Alphabets<'static> {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl<'a> Alphabets<'a> {
    pub fn of(&self, class: CharClass) -> &'a str {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digits,
            CharClass::Punctuation => self.punctuation,
        }
    }

    #[inline]
    pub fn is_ambiguous(&self, c: char) -> bool {
        self.ambiguous.contains(c)
    }

    /// Alphabet for `class`, minus the ambiguous set when `exclude_ambiguous` is set.
    pub fn filtered(&self, class: CharClass, exclude_ambiguous: bool) -> Vec<char> {
        self.of(class)
            .chars()
            .filter(|&c| !(exclude_ambiguous && self.is_ambiguous(c)))
            .collect()
    }
}
