//! Token faces.
//!
//! A token is a two-sided coin sitting on one board square. It has no
//! identity beyond its position; only the visible face carries
//! information.

/// The visible face of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Tails,
    Heads,
}

impl Face {
    /// Returns the single-character notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Face::Tails => 'T',
            Face::Heads => 'H',
        }
    }

    /// Parses a face from its single-character notation abbreviation.
    pub fn from_notation_char(c: char) -> Option<Face> {
        match c {
            'T' => Some(Face::Tails),
            'H' => Some(Face::Heads),
            _ => None,
        }
    }

    /// Returns the opposite face.
    pub const fn toggled(self) -> Face {
        match self {
            Face::Tails => Face::Heads,
            Face::Heads => Face::Tails,
        }
    }

    /// True for `Heads`. Heads tokens are the ones that contribute to
    /// parity groups.
    pub const fn is_heads(self) -> bool {
        matches!(self, Face::Heads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_notation_roundtrip() {
        for face in [Face::Tails, Face::Heads] {
            let c = face.notation_char();
            assert_eq!(Face::from_notation_char(c), Some(face));
        }
        assert_eq!(Face::from_notation_char('x'), None);
        assert_eq!(Face::from_notation_char('h'), None);
    }

    #[test]
    fn toggled_is_its_own_inverse() {
        for face in [Face::Tails, Face::Heads] {
            assert_ne!(face.toggled(), face);
            assert_eq!(face.toggled().toggled(), face);
        }
    }

    #[test]
    fn only_heads_is_heads() {
        assert!(Face::Heads.is_heads());
        assert!(!Face::Tails.is_heads());
    }
}
