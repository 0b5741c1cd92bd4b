//! Coarse strength rating from length and class count.
//!
//! A heuristic label only; it never looks at the password itself.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn classify(length: usize, class_count: usize) -> Strength {
    let length_score = match length {
        12.. => 2,
        8..=11 => 1,
        _ => 0,
    };
    let class_score = match class_count {
        3.. => 2,
        2 => 1,
        _ => 0,
    };

    match length_score + class_score {
        4.. => Strength::Strong,
        3 => Strength::Moderate,
        _ => Strength::Weak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries() {
        assert_eq!(classify(12, 3), Strength::Strong);
        assert_eq!(classify(12, 2), Strength::Moderate);
        assert_eq!(classify(8, 1), Strength::Weak);
        assert_eq!(classify(6, 4), Strength::Weak);
        assert_eq!(classify(12, 1), Strength::Weak);
    }

    #[test]
    fn full_table() {
        use Strength::*;
        // rows: length 6, 8, 11, 12, 40; cols: classes 0..=4
        let table = [
            (6, [Weak, Weak, Weak, Weak, Weak]),
            (8, [Weak, Weak, Weak, Moderate, Moderate]),
            (11, [Weak, Weak, Weak, Moderate, Moderate]),
            (12, [Weak, Weak, Moderate, Strong, Strong]),
            (40, [Weak, Weak, Moderate, Strong, Strong]),
        ];
        for (length, row) in table {
            for (classes, expected) in row.into_iter().enumerate() {
                assert_eq!(classify(length, classes), expected, "({length}, {classes})");
            }
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Strength::Moderate.to_string(), "Moderate");
        assert_eq!(Strength::Strong.label(), "Strong");
    }
}
