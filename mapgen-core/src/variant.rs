//! Fixed enumerations behind Bedrock's legacy data values.
//!
//! The declaration order of every enum here is load-bearing: a variant's ordinal
//! is the data value Bedrock expects for it, so variants must never be reordered.

/// Wood species, ordinal = Bedrock data value of `minecraft:planks`, `minecraft:wooden_slab`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WoodType {
    Oak,
    Spruce,
    Birch,
    Jungle,
    Acacia,
    DarkOak,
}

impl WoodType {
    pub const ALL: [Self; 6] = [
        Self::Oak,
        Self::Spruce,
        Self::Birch,
        Self::Jungle,
        Self::Acacia,
        Self::DarkOak,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Oak => "oak",
            Self::Spruce => "spruce",
            Self::Birch => "birch",
            Self::Jungle => "jungle",
            Self::Acacia => "acacia",
            Self::DarkOak => "dark_oak",
        }
    }
}

/// Stone types, ordinal = Bedrock data value of `minecraft:stone`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StoneType {
    Stone,
    Granite,
    PolishedGranite,
    Diorite,
    PolishedDiorite,
    Andesite,
    PolishedAndesite,
}

impl StoneType {
    pub const ALL: [Self; 7] = [
        Self::Stone,
        Self::Granite,
        Self::PolishedGranite,
        Self::Diorite,
        Self::PolishedDiorite,
        Self::Andesite,
        Self::PolishedAndesite,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Stone => "stone",
            Self::Granite => "granite",
            Self::PolishedGranite => "polished_granite",
            Self::Diorite => "diorite",
            Self::PolishedDiorite => "polished_diorite",
            Self::Andesite => "andesite",
            Self::PolishedAndesite => "polished_andesite",
        }
    }
}

/// The 16 dye colors in Java order.
///
/// Ordinal = data value of wool, stained glass and stained glass panes.
/// `minecraft:dye` counts the other way round, see [`DyeColor::dye_data`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl DyeColor {
    pub const ALL: [Self; 16] = [
        Self::White,
        Self::Orange,
        Self::Magenta,
        Self::LightBlue,
        Self::Yellow,
        Self::Lime,
        Self::Pink,
        Self::Gray,
        Self::LightGray,
        Self::Cyan,
        Self::Purple,
        Self::Blue,
        Self::Brown,
        Self::Green,
        Self::Red,
        Self::Black,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Data value of this color under `minecraft:dye`.
    pub const fn dye_data(self) -> u8 {
        crate::MAX_DATA_VALUE - self.ordinal()
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Orange => "orange",
            Self::Magenta => "magenta",
            Self::LightBlue => "light_blue",
            Self::Yellow => "yellow",
            Self::Lime => "lime",
            Self::Pink => "pink",
            Self::Gray => "gray",
            Self::LightGray => "light_gray",
            Self::Cyan => "cyan",
            Self::Purple => "purple",
            Self::Blue => "blue",
            Self::Brown => "brown",
            Self::Green => "green",
            Self::Red => "red",
            Self::Black => "black",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (i, wood) in WoodType::ALL.iter().enumerate() {
            assert_eq!(wood.ordinal() as usize, i);
        }
        for (i, stone) in StoneType::ALL.iter().enumerate() {
            assert_eq!(stone.ordinal() as usize, i);
        }
        for (i, color) in DyeColor::ALL.iter().enumerate() {
            assert_eq!(color.ordinal() as usize, i);
        }
    }

    #[test]
    fn dye_data_is_inverted() {
        assert_eq!(DyeColor::White.dye_data(), 15);
        assert_eq!(DyeColor::Black.dye_data(), 0);
        assert_eq!(DyeColor::LightBlue.dye_data(), 12);
    }

    #[test]
    fn well_known_data_values() {
        assert_eq!(WoodType::DarkOak.ordinal(), 5);
        assert_eq!(WoodType::DarkOak.name(), "dark_oak");
        assert_eq!(StoneType::PolishedAndesite.ordinal(), 6);
        assert_eq!(DyeColor::LightGray.name(), "light_gray");
        assert_eq!(DyeColor::LightGray.ordinal(), 8);
    }
}
