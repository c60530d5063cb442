// SPDX-License-Identifier: MPL-2.0
//! The gallery's only piece of mutable state: which artwork is on screen.

use std::fmt;

/// 1-based position of the artwork currently displayed.
///
/// The value is always within `1..=COUNT`; both navigation steps wrap
/// around instead of leaving that range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenIndex(u8);

impl ScreenIndex {
    /// Number of screens in the cycle.
    pub const COUNT: u8 = 3;

    /// Screen shown when the gallery is mounted.
    pub const FIRST: Self = Self(1);

    /// Last screen of the cycle.
    pub const LAST: Self = Self(Self::COUNT);

    /// Builds an index from a 1-based value, rejecting anything outside
    /// `1..=COUNT`.
    #[must_use]
    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::COUNT).contains(&value).then_some(Self(value))
    }

    /// Returns the raw 1-based value.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the 0-based position, suitable for indexing tables.
    #[must_use]
    pub fn position(self) -> usize {
        usize::from(self.0 - 1)
    }

    /// Steps forward: 1 → 2, 2 → 3, 3 → 1.
    #[must_use]
    pub fn next(self) -> Self {
        match self.0 {
            1..=2 => Self(self.0 + 1),
            _ => Self::FIRST,
        }
    }

    /// Steps backward: 3 → 2, 2 → 1, 1 → 3.
    #[must_use]
    pub fn previous(self) -> Self {
        match self.0 {
            2..=3 => Self(self.0 - 1),
            _ => Self::LAST,
        }
    }

    /// Iterates every screen in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=Self::COUNT).map(Self)
    }
}

impl Default for ScreenIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u8> for ScreenIndex {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

impl From<ScreenIndex> for u8 {
    fn from(index: ScreenIndex) -> Self {
        index.0
    }
}

impl fmt::Display for ScreenIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
