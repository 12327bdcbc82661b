//! Cards: a family paired with a member.
//!
//! The game uses a fixed universe of 42 cards, one per
//! `(Family, Member)` combination. Both enums are closed, so a `Card`
//! can never name something outside the universe; the only way to ask
//! for an unknown card is through text, which `FromStr` rejects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rules::GameError;

/// Number of families in the game.
pub const FAMILY_COUNT: usize = 7;

/// Number of members in a complete family.
pub const MEMBER_COUNT: usize = 6;

/// Total number of distinct cards.
pub const CARD_COUNT: usize = FAMILY_COUNT * MEMBER_COUNT;

/// One of the seven card families.
///
/// Declaration order is the scan order for completion checks and the
/// primary sort key for hand display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Family {
    Cat,
    Dog,
    Monkey,
    Frog,
    Unicorn,
    Octopus,
    Turtle,
}

impl Family {
    /// All families in declaration order.
    pub const ALL: [Family; FAMILY_COUNT] = [
        Family::Cat,
        Family::Dog,
        Family::Monkey,
        Family::Frog,
        Family::Unicorn,
        Family::Octopus,
        Family::Turtle,
    ];

    /// English name, as shown in menus.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Family::Cat => "Cat",
            Family::Dog => "Dog",
            Family::Monkey => "Monkey",
            Family::Frog => "Frog",
            Family::Unicorn => "Unicorn",
            Family::Octopus => "Octopus",
            Family::Turtle => "Turtle",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Family::Cat => "🐱",
            Family::Dog => "🐶",
            Family::Monkey => "🐵",
            Family::Frog => "🐸",
            Family::Unicorn => "🦄",
            Family::Octopus => "🐙",
            Family::Turtle => "🐢",
        }
    }

    /// The six cards of this family, in member order.
    pub fn cards(self) -> impl Iterator<Item = Card> {
        Member::ALL.into_iter().map(move |member| Card::new(self, member))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Family::ALL
            .into_iter()
            .find(|family| family.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::InvalidRequest(format!("unknown family '{wanted}'")))
    }
}

/// One of the six members of a family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Member {
    Grandfather,
    Grandmother,
    Father,
    Mother,
    Son,
    Daughter,
}

impl Member {
    /// All members in declaration order.
    pub const ALL: [Member; MEMBER_COUNT] = [
        Member::Grandfather,
        Member::Grandmother,
        Member::Father,
        Member::Mother,
        Member::Son,
        Member::Daughter,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Member::Grandfather => "Grandfather",
            Member::Grandmother => "Grandmother",
            Member::Father => "Father",
            Member::Mother => "Mother",
            Member::Son => "Son",
            Member::Daughter => "Daughter",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Member::Grandfather => "👴",
            Member::Grandmother => "👵",
            Member::Father => "👨",
            Member::Mother => "👩",
            Member::Son => "👦",
            Member::Daughter => "👧",
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Member {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Member::ALL
            .into_iter()
            .find(|member| member.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| GameError::InvalidRequest(format!("unknown member '{wanted}'")))
    }
}

/// An immutable `(family, member)` card.
///
/// Ordering is by family first, then member, which gives the stable
/// display order for hands.
///
/// ## Example
///
/// ```
/// use seven_families::core::{Card, Family, Member};
///
/// let card = Card::new(Family::Cat, Member::Father);
/// assert_eq!(card.emoji(), "🐱👨");
/// assert_eq!(card.to_string(), "Cat Father");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub family: Family,
    pub member: Member,
}

impl Card {
    #[must_use]
    pub const fn new(family: Family, member: Member) -> Self {
        Self { family, member }
    }

    /// Family emoji followed by member emoji.
    #[must_use]
    pub fn emoji(self) -> String {
        format!("{}{}", self.family.emoji(), self.member.emoji())
    }

    /// Iterate over the full 42-card universe, family by family.
    pub fn universe() -> impl Iterator<Item = Card> {
        Family::ALL.into_iter().flat_map(Family::cards)
    }

    /// Parse a card from a family name and a member name.
    pub fn parse(family: &str, member: &str) -> Result<Self, GameError> {
        Ok(Self::new(family.parse()?, member.parse()?))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.member)
    }
}
