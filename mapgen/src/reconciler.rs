//! Matches every Java entry against the Bedrock table.
//!
//! Each (Java, Bedrock) pair is checked once, in this order:
//! 1. wood variants: Java keys containing `oak_` match the Bedrock entry named like the key
//!    without `oak_` (and with `terracotta` spelled `stained_hardened_clay`), then fan out to
//!    every [`WoodType`] with the species ordinal as data value.
//! 2. stone variants: `minecraft:stone` fans out to every [`StoneType`].
//! 3. direct: the Bedrock name equals the Java identifier, ignoring case.
//!
//! Expansions are appended during the scan, direct matches once it is done, and hand written
//! remaps (dye colors, `minecraft:nether_star`) last.

use itertools::Itertools;
use log::{debug, warn};
use mapgen_core::{
    BedrockEntry, BedrockTable, ConversionTable, DyeColor, JavaTable, StoneType, WoodType,
};

const WOOD_MARKER: &str = "oak_";
const STONE: &str = "minecraft:stone";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Items,
    Blocks,
}

/// A colored Java family that collapses into one Bedrock entry keyed by data value.
struct ColoredRemap {
    /// Java identifiers are `minecraft:<color>_<suffix>`
    suffix: &'static str,
    bedrock: &'static str,
    data: fn(DyeColor) -> u8,
}

static COLORED_REMAPS: [ColoredRemap; 4] = [
    ColoredRemap {
        suffix: "dye",
        bedrock: "minecraft:dye",
        data: DyeColor::dye_data,
    },
    ColoredRemap {
        suffix: "wool",
        bedrock: "minecraft:wool",
        data: DyeColor::ordinal,
    },
    ColoredRemap {
        suffix: "stained_glass",
        bedrock: "minecraft:stained_glass",
        data: DyeColor::ordinal,
    },
    ColoredRemap {
        suffix: "stained_glass_pane",
        bedrock: "minecraft:stained_glass_pane",
        data: DyeColor::ordinal,
    },
];

/// Java identifier -> Bedrock name, data value copied as is.
static ITEM_RENAMES: [(&str, &str); 1] = [("minecraft:nether_star", "minecraft:netherstar")];

impl TableKind {
    fn colored_remaps(self) -> &'static [ColoredRemap] {
        match self {
            Self::Items => &COLORED_REMAPS,
            // there is no dye block
            Self::Blocks => &COLORED_REMAPS[1..],
        }
    }

    fn renames(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Items => &ITEM_RENAMES,
            Self::Blocks => &[],
        }
    }
}

/// What kind of matching a Java identifier takes part in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentifierKind {
    WoodVariant { stripped: String },
    StoneVariant,
    Direct,
}

impl IdentifierKind {
    pub fn classify(identifier: &str) -> Self {
        if identifier.contains(WOOD_MARKER) {
            Self::WoodVariant {
                stripped: identifier
                    .replace(WOOD_MARKER, "")
                    .replace("terracotta", "stained_hardened_clay"),
            }
        } else if identifier.eq_ignore_ascii_case(STONE) {
            Self::StoneVariant
        } else {
            Self::Direct
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairMatch {
    Wood,
    Stone,
    Direct,
    Unmatched,
}

pub fn match_pair(kind: &IdentifierKind, identifier: &str, bedrock: &BedrockEntry) -> PairMatch {
    match kind {
        IdentifierKind::WoodVariant { stripped } => {
            if bedrock.data == 0 && stripped.eq_ignore_ascii_case(&bedrock.name) {
                PairMatch::Wood
            } else {
                PairMatch::Unmatched
            }
        }
        IdentifierKind::StoneVariant if bedrock.name.eq_ignore_ascii_case(STONE) => PairMatch::Stone,
        _ if bedrock.name.eq_ignore_ascii_case(identifier) => PairMatch::Direct,
        _ => PairMatch::Unmatched,
    }
}

/// Builds the conversion table for one Java table against one Bedrock table.
pub fn reconcile(java: &JavaTable, bedrock: &BedrockTable, kind: TableKind) -> ConversionTable {
    let mut table = ConversionTable::new();
    let mut missing = Vec::new();
    // applied after every expansion so a key's list reads expansions, direct matches, remaps
    let mut direct = Vec::new();

    for entry in java.values() {
        let identifier_kind = IdentifierKind::classify(&entry.identifier);
        for candidate in bedrock.values() {
            match match_pair(&identifier_kind, &entry.identifier, candidate) {
                PairMatch::Wood => {
                    let variants = WoodType::ALL.iter().map(|wood| {
                        let species = format!("{}_", wood.name());
                        (entry.identifier.replace(WOOD_MARKER, &species), wood.ordinal())
                    });
                    expand(&mut table, &mut missing, java, candidate, variants);
                }
                PairMatch::Stone => {
                    let variants = StoneType::ALL
                        .iter()
                        .map(|stone| (entry.identifier.replace("stone", stone.name()), stone.ordinal()));
                    expand(&mut table, &mut missing, java, candidate, variants);
                }
                PairMatch::Direct => direct.push((entry, candidate)),
                PairMatch::Unmatched => {}
            }
        }
    }

    for (entry, candidate) in direct {
        table.append(entry, candidate.clone());
    }

    apply_remaps(&mut table, &mut missing, java, bedrock, kind);

    if !missing.is_empty() {
        debug!(
            "{kind:?}: {} derived identifiers have no Java entry: {}",
            missing.len(),
            missing.iter().unique().join(", ")
        );
    }
    table
}

/// Appends `bedrock` with each variant's data value to the Java entry named by that variant.
/// Variants without a Java entry are skipped.
fn expand(
    table: &mut ConversionTable,
    missing: &mut Vec<String>,
    java: &JavaTable,
    bedrock: &BedrockEntry,
    variants: impl Iterator<Item = (String, u8)>,
) {
    for (identifier, data) in variants {
        match java.get(&identifier) {
            Some(target) => table.append(target, bedrock.with_data(data)),
            None => missing.push(identifier),
        }
    }
}

fn apply_remaps(
    table: &mut ConversionTable,
    missing: &mut Vec<String>,
    java: &JavaTable,
    bedrock: &BedrockTable,
    kind: TableKind,
) {
    for remap in kind.colored_remaps() {
        let Some(target) = bedrock.get(remap.bedrock) else {
            warn!("{kind:?}: no Bedrock entry {}, skipping its color remaps", remap.bedrock);
            continue;
        };
        let variants = DyeColor::ALL.iter().map(|&color| {
            (
                format!("minecraft:{}_{}", color.name(), remap.suffix),
                (remap.data)(color),
            )
        });
        expand(table, missing, java, target, variants);
    }

    for &(java_identifier, bedrock_name) in kind.renames() {
        let Some(target) = bedrock.get(bedrock_name) else {
            warn!("{kind:?}: no Bedrock entry {bedrock_name}, skipping remap of {java_identifier}");
            continue;
        };
        match java.get(java_identifier) {
            Some(source) => table.append(source, target.clone()),
            None => missing.push(java_identifier.to_string()),
        }
    }
}
