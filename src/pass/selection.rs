use super::CharClass;

/// Which character classes to draw from, and whether to drop ambiguous characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub punctuation: bool,
    pub exclude_ambiguous: bool,
}

impl Selection {
    pub fn is_selected(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digit => self.digits,
            CharClass::Punctuation => self.punctuation,
        }
    }

    /// Selected classes in fixed order.
    pub fn classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .into_iter()
            .filter(move |&c| self.is_selected(c))
    }

    pub fn class_count(&self) -> usize {
        self.classes().count()
    }

    pub fn has_any(&self) -> bool {
        self.class_count() > 0
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            upper: true,
            lower: true,
            digits: true,
            punctuation: true,
            exclude_ambiguous: false,
        }
    }
}
