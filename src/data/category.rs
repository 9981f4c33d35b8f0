use crate::utility::InvalidEnumStr;
use enumset::EnumSetType;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Selects which rules are used to look up and measure a level record.
#[derive(EnumSetType, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Category {
	Skill,
	Dungeon,
	DungeonClass,
	SkyblockLevel,
}

impl Category {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Skill => "skill",
			Self::Dungeon => "dungeon",
			Self::DungeonClass => "dungeon_class",
			Self::SkyblockLevel => "skyblock_level",
		}
	}
}

impl std::fmt::Display for Category {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

impl FromStr for Category {
	type Err = InvalidEnumStr<Self>;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"skill" => Ok(Self::Skill),
			"dungeon" => Ok(Self::Dungeon),
			"dungeon_class" => Ok(Self::DungeonClass),
			"skyblock_level" => Ok(Self::SkyblockLevel),
			_ => Err(InvalidEnumStr::from(s)),
		}
	}
}
