use super::{Category, Level};
use crate::utility::{format_grouped, format_number};

/// Which measure of progress a bar displays.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BarMode {
	/// Progress towards the next level, as shown by the always-visible bar.
	Global,
	/// Progress of the level towards the level cap.
	Level,
}

/// Divides two quantities into a fraction in `[0, 1]`.
/// A zero, negative, or unbounded denominator means there is nothing left to progress towards.
fn fraction(numerator: f64, denominator: f64) -> f64 {
	if denominator.is_nan() || denominator <= 0.0 || denominator.is_infinite() {
		return 1.0;
	}
	clamp_fraction(numerator / denominator)
}

/// Progress towards the next level threshold.
/// A zero threshold is already reached. Without a threshold the bar stays empty.
fn next_level_fraction(level: &Level) -> f64 {
	match level.xp_for_next {
		Some(next) if next == 0.0 => 1.0,
		Some(next) => clamp_fraction(level.xp_current / next),
		None => 0.0,
	}
}

fn clamp_fraction(value: f64) -> f64 {
	match value.is_nan() {
		true => 0.0,
		false => value.clamp(0.0, 1.0),
	}
}

/// Returns true if the entity has reached its terminal state.
///
/// Entities which track total experience are maxed when they have all of it,
/// all others are maxed when they reach the level cap.
pub fn is_maxed(level: &Level) -> bool {
	match level.max_experience {
		Some(max_experience) => level.xp_current == max_experience,
		None => level.is_max_level(),
	}
}

/// The progress of the aggregate skyblock level.
///
/// Once the level cap is reached, progress is measured against the total experience.
/// Until then the backend's own fraction is used.
pub fn skyblock_progress(level: &Level) -> f64 {
	match level.max_experience {
		Some(max_experience) if level.is_max_level() => fraction(level.xp_current, max_experience),
		_ => clamp_fraction(level.progress),
	}
}

/// The fill fraction of a progress bar, always in `[0, 1]`.
pub fn progress(level: &Level, category: Category, mode: BarMode) -> f64 {
	match (category, mode) {
		(Category::SkyblockLevel, _) => skyblock_progress(level),
		(Category::Skill | Category::Dungeon | Category::DungeonClass, BarMode::Global) => {
			next_level_fraction(level)
		}
		(Category::Skill | Category::Dungeon | Category::DungeonClass, BarMode::Level) => {
			fraction(level.level as f64, level.max_level as f64)
		}
	}
}

/// The text shown on the bar while it is not hovered, e.g. `1.2K / 5.0K XP`.
pub fn main_text(level: &Level) -> String {
	let current = format_number(level.xp_current, true);
	match level.next_threshold() {
		Some(next) if level.is_max_level() && level.xp_current == next => current,
		Some(next) => format!("{current} / {} XP", format_number(next, true)),
		None => current,
	}
}

/// The text shown on the bar while it is hovered, e.g. `1,234 / 5,000 XP`.
pub fn hover_text(level: &Level, category: Category) -> String {
	match category {
		Category::SkyblockLevel => format!("{} / {} Level", level.level, level.max_level),
		Category::Skill | Category::Dungeon | Category::DungeonClass => match level.next_threshold() {
			Some(next) => format!("{} / {} XP", format_grouped(level.xp_current), format_grouped(next)),
			None => format_grouped(level.xp_current),
		},
	}
}

/// Everything a widget needs to display a level record, derived once per refresh.
///
/// Every widget showing the same record derives the same values, so separate widgets
/// for the aggregate skyblock level never disagree on its progress.
#[derive(Clone, PartialEq, Debug)]
pub struct ProgressDisplay {
	pub progress: f64,
	pub maxed: bool,
	pub main_text: String,
	pub hover_text: String,
	pub level_label: String,
	/// The level cap has been reached and the icon should shine.
	pub shine: bool,
	pub rank: Option<u32>,
}

impl ProgressDisplay {
	pub fn derive(level: &Level, category: Category) -> Self {
		Self {
			progress: progress(level, category, BarMode::Global),
			maxed: is_maxed(level),
			main_text: main_text(level),
			hover_text: hover_text(level, category),
			level_label: level.label(),
			shine: level.is_max_level(),
			rank: level.displayed_rank(),
		}
	}

	pub fn text(&self, hovering: bool) -> &str {
		match hovering {
			true => &self.hover_text,
			false => &self.main_text,
		}
	}

	/// Tooltip markup for the leaderboard rank, if the rank is displayed.
	pub fn rank_tooltip(&self) -> Option<String> {
		let rank = self.rank?;
		Some(format!(
			"<span class='stat-name'>Rank: </span><span class='stat-value'>#{rank}</span>"
		))
	}
}
