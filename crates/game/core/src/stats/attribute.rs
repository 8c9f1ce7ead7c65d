//! The closed set of character attributes.

/// One of the six core attributes a character is built from.
///
/// The set is closed: per-attribute storage is a fixed array indexed by
/// [`Attribute::index`], so adding a variant is a compile-time change everywhere.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    pub const COUNT: usize = 6;

    pub const ALL: [Attribute; Self::COUNT] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Attribute::Strength => 0,
            Attribute::Dexterity => 1,
            Attribute::Constitution => 2,
            Attribute::Intelligence => 3,
            Attribute::Wisdom => 4,
            Attribute::Charisma => 5,
        }
    }

    /// Three-letter abbreviation used in compact listings.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Dexterity => "DEX",
            Attribute::Constitution => "CON",
            Attribute::Intelligence => "INT",
            Attribute::Wisdom => "WIS",
            Attribute::Charisma => "CHA",
        }
    }
}
