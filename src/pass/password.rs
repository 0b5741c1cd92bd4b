use std::fmt;

use zeroize::Zeroize;

/// A finished password. Zeroed on drop; `Debug` never prints the contents.
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(super) fn new(text: String) -> Self {
        Self(text)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Debug for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GeneratedPassword(<{} chars redacted>)", self.len())
    }
}

impl Drop for GeneratedPassword {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
