pub mod entry;
pub mod identifier;
pub mod variant;

pub use entry::{BedrockEntry, BedrockTable, ConversionTable, JavaEntry, JavaTable, OutputRecord};
pub use identifier::{ParseResourceLocationError, ResourceLocation};
pub use variant::{DyeColor, StoneType, WoodType};

/// Highest legacy data value Bedrock can carry (4 bits).
pub const MAX_DATA_VALUE: u8 = 15;
