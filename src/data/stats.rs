use super::{Category, Level};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Id of the element which carries the computed stats document in the viewer page.
pub static STATS_ELEMENT_ID: &'static str = "calculated";
/// The only dungeon which has a level of its own.
pub static CATACOMBS: &'static str = "catacombs";
/// Display name of the aggregate skyblock level widget.
pub static SKYBLOCK_LEVEL: &'static str = "Skyblock Level";
/// Only present when the profile's skills api is enabled.
static SKILLS_API_MARKER: &'static str = "runecrafting";

#[derive(thiserror::Error, Debug)]
#[error("Missing computed stats, no element with id {0:?} was found in the document.")]
pub struct MissingStats(pub &'static str);

/// The computed statistics of a profile, as produced by the stats backend.
#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct ComputedStats {
	#[serde(default)]
	pub skills: Skills,
	#[serde(default)]
	pub dungeons: Dungeons,
	#[serde(default)]
	pub skyblock_level: Option<Level>,
}

#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct Skills {
	#[serde(default)]
	pub skills: BTreeMap<String, Level>,
}

#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct Dungeons {
	#[serde(default)]
	pub catacombs: Option<DungeonEntry>,
	#[serde(default)]
	pub classes: DungeonClasses,
}

#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct DungeonClasses {
	#[serde(default)]
	pub classes: BTreeMap<String, DungeonEntry>,
}

#[derive(Clone, PartialEq, Default, Debug, Serialize, Deserialize)]
pub struct DungeonEntry {
	pub level: Level,
}

impl ComputedStats {
	pub fn from_json(content: &str) -> anyhow::Result<Self> {
		serde_json::from_str(content).context("Invalid computed stats document")
	}

	/// Reads the stats document embedded in the page.
	pub fn from_document() -> anyhow::Result<Self> {
		let element = gloo_utils::document()
			.get_element_by_id(STATS_ELEMENT_ID)
			.ok_or(MissingStats(STATS_ELEMENT_ID))?;
		let content = element.text_content().unwrap_or_default();
		Self::from_json(&content)
	}

	/// Finds the level record displayed for a named entity of some category.
	/// Returns None when there is nothing to display.
	pub fn select_level(&self, name: &str, category: Category) -> Option<&Level> {
		match category {
			Category::Skill => self.skills.skills.get(name),
			Category::Dungeon if name == CATACOMBS => {
				self.dungeons.catacombs.as_ref().map(|entry| &entry.level)
			}
			Category::Dungeon => None,
			Category::DungeonClass => self.dungeons.classes.classes.get(name).map(|entry| &entry.level),
			Category::SkyblockLevel => self.skyblock_level.as_ref(),
		}
	}

	/// Progress text is only meaningful when the skills api data is available.
	pub fn show_progress_text(&self) -> bool {
		self.skills.skills.contains_key(SKILLS_API_MARKER)
	}

	/// Every displayable entity, in display order.
	pub fn entries(&self) -> impl Iterator<Item = (&str, Category)> + '_ {
		let skyblock = self.skyblock_level.iter().map(|_| (SKYBLOCK_LEVEL, Category::SkyblockLevel));
		let skills = self.skills.skills.keys().map(|name| (name.as_str(), Category::Skill));
		let catacombs = self.dungeons.catacombs.iter().map(|_| (CATACOMBS, Category::Dungeon));
		let classes = self.dungeons.classes.classes.keys().map(|name| (name.as_str(), Category::DungeonClass));
		skyblock.chain(skills).chain(catacombs).chain(classes)
	}
}
