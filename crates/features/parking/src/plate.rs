use std::fmt;

/// Odd/even classification of a registration number by its last character.
///
/// A registration ending in `1`, `3`, `5`, `7` or `9` is odd. Everything else is
/// even: the digits `0`, `2`, `4`, `6`, `8`, any letter or symbol, and the empty
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlateParity {
    Odd,
    Even,
}

impl PlateParity {
    /// Classifies `registration`.
    ///
    /// # Example
    /// ```rust
    /// use phub_parking::PlateParity;
    ///
    /// assert_eq!(PlateParity::of("KA-01-HH-9999"), PlateParity::Odd);
    /// assert_eq!(PlateParity::of("KA-01-HH-1230"), PlateParity::Even);
    /// assert_eq!(PlateParity::of("KA-01-HH-12AB"), PlateParity::Even);
    /// ```
    #[must_use]
    pub fn of(registration: &str) -> Self {
        match registration.chars().next_back().and_then(|c| c.to_digit(10)) {
            Some(digit) if digit % 2 == 1 => Self::Odd,
            _ => Self::Even,
        }
    }

    #[must_use]
    pub const fn is_odd(self) -> bool {
        matches!(self, Self::Odd)
    }
}

impl fmt::Display for PlateParity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Odd => "odd",
            Self::Even => "even",
        })
    }
}
