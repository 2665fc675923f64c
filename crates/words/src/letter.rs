use crate::error::{Result, WordError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of generators with a single-character spelling (`a..=z`)
const ALPHABET_LEN: i32 = 26;

/// A signed generator: positive values are generators, negative values their formal inverses
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Letter(i32);

impl Letter {
    /// Create a letter from a signed generator index (1-based)
    pub fn new(signed_generator: i32) -> Result<Self> {
        if signed_generator == 0 {
            return Err(WordError::ZeroGenerator);
        }
        // -i32::MIN overflows, so the inverse would not be a letter
        if signed_generator == i32::MIN {
            return Err(WordError::GeneratorOutOfRange(signed_generator));
        }
        Ok(Self(signed_generator))
    }

    /// Lowercase letters are generators, uppercase letters their inverses
    pub fn from_char(ch: char) -> Result<Self> {
        if ch.is_ascii_lowercase() {
            Ok(Self(i32::from(ch as u8 - b'a') + 1))
        } else if ch.is_ascii_uppercase() {
            Ok(Self(-(i32::from(ch as u8 - b'A') + 1)))
        } else {
            Err(WordError::InvalidLetter(ch))
        }
    }

    /// Signed generator index
    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// Unsigned generator index (1-based)
    #[must_use]
    pub const fn generator(self) -> u32 {
        self.0.unsigned_abs()
    }

    #[must_use]
    pub const fn is_inverted(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn inverse(self) -> Self {
        Self(-self.0)
    }

    #[must_use]
    pub const fn is_inverse_of(self, other: Self) -> bool {
        self.0 == -other.0
    }
}

impl TryFrom<i32> for Letter {
    type Error = WordError;

    fn try_from(value: i32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Letter> for i32 {
    fn from(letter: Letter) -> Self {
        letter.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.0.abs();
        if index <= ALPHABET_LEN {
            let base = if self.is_inverted() { b'A' } else { b'a' };
            // index is in 1..=26, so the offset fits in a u8
            let ch = (base + (index - 1) as u8) as char;
            write!(f, "{ch}")
        } else if self.is_inverted() {
            write!(f, "X{index}")
        } else {
            write!(f, "x{index}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_encodes_inversion() {
        let a = Letter::from_char('a').unwrap();
        let big_a = Letter::from_char('A').unwrap();
        assert_eq!(a.value(), 1);
        assert_eq!(big_a.value(), -1);
        assert!(a.is_inverse_of(big_a));
        assert_eq!(a.inverse(), big_a);
        assert_eq!(Letter::from_char('z').unwrap().value(), 26);
    }

    #[test]
    fn test_rejects_non_letters() {
        assert_eq!(Letter::from_char('1'), Err(WordError::InvalidLetter('1')));
        assert_eq!(Letter::new(0), Err(WordError::ZeroGenerator));
    }

    #[test]
    fn test_extreme_generators() {
        assert_eq!(
            Letter::new(i32::MIN),
            Err(WordError::GeneratorOutOfRange(i32::MIN))
        );
        let lowest = Letter::new(i32::MIN + 1).unwrap();
        assert_eq!(lowest.inverse().value(), i32::MAX);
        assert_eq!(lowest.to_string(), format!("X{}", i32::MAX));
        assert!(serde_json::from_str::<Letter>("-2147483648").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Letter::new(3).unwrap().to_string(), "c");
        assert_eq!(Letter::new(-2).unwrap().to_string(), "B");
        assert_eq!(Letter::new(27).unwrap().to_string(), "x27");
        assert_eq!(Letter::new(-40).unwrap().to_string(), "X40");
    }

    #[test]
    fn test_serde_as_signed_integer() {
        let letter: Letter = serde_json::from_str("-3").unwrap();
        assert_eq!(letter.to_string(), "C");
        assert_eq!(serde_json::to_string(&letter).unwrap(), "-3");
        assert!(serde_json::from_str::<Letter>("0").is_err());
    }
}
