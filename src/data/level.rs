use serde::{Deserialize, Serialize};

/// Ranks at or above this are not worth showing in a tooltip.
pub const RANK_DISPLAY_LIMIT: u32 = 50_000;

/// The progress state of one trackable entity (a skill, the catacombs, a dungeon class,
/// or the aggregate skyblock level), as computed by the stats backend.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
	/// The current level, or `-1` when unknown.
	#[serde(default = "Level::unknown")]
	pub level: i32,
	#[serde(default)]
	pub max_level: i32,
	#[serde(default)]
	pub xp_current: f64,
	/// Experience needed to reach the next level.
	/// Absent (or infinite) when the entity can no longer advance.
	#[serde(default)]
	pub xp_for_next: Option<f64>,
	/// Total experience needed to reach `max_level`,
	/// only provided for entities which track total progress.
	#[serde(default)]
	pub max_experience: Option<f64>,
	#[serde(default)]
	pub rank: Option<u32>,
	/// Progress fraction provided by the backend for the aggregate skyblock level.
	#[serde(default)]
	pub progress: f64,
}

impl Default for Level {
	fn default() -> Self {
		Self {
			level: Self::unknown(),
			max_level: 0,
			xp_current: 0.0,
			xp_for_next: None,
			max_experience: None,
			rank: None,
			progress: 0.0,
		}
	}
}

impl Level {
	fn unknown() -> i32 {
		-1
	}

	pub fn is_known(&self) -> bool {
		self.level >= 0
	}

	pub fn is_max_level(&self) -> bool {
		self.level == self.max_level
	}

	/// The experience threshold of the next level, if the entity can still advance.
	/// A zero threshold is not shown.
	pub fn next_threshold(&self) -> Option<f64> {
		self.xp_for_next.filter(|xp| xp.is_finite() && *xp != 0.0)
	}

	/// The level as displayed next to the name, `?` when unknown.
	pub fn label(&self) -> String {
		match self.is_known() {
			true => self.level.to_string(),
			false => "?".into(),
		}
	}

	/// The leaderboard rank, if it is good enough to be displayed.
	pub fn displayed_rank(&self) -> Option<u32> {
		self.rank.filter(|rank| *rank > 0 && *rank < RANK_DISPLAY_LIMIT)
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn deserialize_full() -> anyhow::Result<()> {
		let json = r#"{
			"level": 10, "maxLevel": 50, "xpCurrent": 120, "xpForNext": 500,
			"rank": 1234
		}"#;
		let expected = Level {
			level: 10,
			max_level: 50,
			xp_current: 120.0,
			xp_for_next: Some(500.0),
			rank: Some(1234),
			..Default::default()
		};
		assert_eq!(serde_json::from_str::<Level>(json)?, expected);
		Ok(())
	}

	#[test]
	fn deserialize_missing_level() -> anyhow::Result<()> {
		let level = serde_json::from_str::<Level>(r#"{ "maxLevel": 60, "xpForNext": null }"#)?;
		assert_eq!(level.level, -1);
		assert_eq!(level.xp_for_next, None);
		assert_eq!(level.label(), "?");
		Ok(())
	}

	#[test]
	fn label_known() {
		let level = Level {
			level: 0,
			..Default::default()
		};
		assert_eq!(level.label(), "0");
	}

	#[test]
	fn next_threshold_infinite() {
		let level = Level {
			xp_for_next: Some(f64::INFINITY),
			..Default::default()
		};
		assert_eq!(level.next_threshold(), None);
	}

	#[test]
	fn next_threshold_zero() {
		let level = Level {
			xp_for_next: Some(0.0),
			..Default::default()
		};
		assert_eq!(level.next_threshold(), None);
	}

	#[test]
	fn displayed_rank_bounds() {
		let with_rank = |rank| Level {
			rank: Some(rank),
			..Default::default()
		};
		assert_eq!(with_rank(1).displayed_rank(), Some(1));
		assert_eq!(with_rank(49_999).displayed_rank(), Some(49_999));
		assert_eq!(with_rank(50_000).displayed_rank(), None);
		assert_eq!(with_rank(0).displayed_rank(), None);
		assert_eq!(Level::default().displayed_rank(), None);
	}
}
