use skill_progress::{data::ComputedStats, logging};

#[cfg(target_family = "wasm")]
fn main() {
	use skill_progress::components::{StatsViewer, StatsViewerProps};
	use std::rc::Rc;

	logging::wasm::init(logging::wasm::Config::default().prefer_target());
	match ComputedStats::from_document() {
		Ok(stats) => {
			let props = StatsViewerProps { stats: Rc::new(stats) };
			yew::Renderer::<StatsViewer>::with_props(props).render();
		}
		Err(err) => log::error!("{err:?}"),
	}
}

/// Prints the display state of every widget for a computed stats document.
#[cfg(not(target_family = "wasm"))]
fn main() -> anyhow::Result<()> {
	use anyhow::Context;
	use skill_progress::data::ProgressDisplay;

	logging::console::init("skill-progress", &[])?;

	let Some(path) = std::env::args().nth(1) else {
		anyhow::bail!("Usage: skill-progress <computed-stats.json>");
	};
	let content = std::fs::read_to_string(&path).with_context(|| format!("Failed to read {path:?}"))?;
	let stats = ComputedStats::from_json(&content).with_context(|| format!("while parsing {path:?}"))?;

	for (name, category) in stats.entries() {
		let Some(level) = stats.select_level(name, category) else {
			log::warn!("No {category} level for {name:?}.");
			continue;
		};
		let display = ProgressDisplay::derive(level, category);
		log::info!(
			target: "skill_bar",
			"{name} ({category}) lvl {}: {:.1}%{} | {} | {}{}",
			display.level_label,
			display.progress * 100.0,
			display.maxed.then_some(" maxed").unwrap_or_default(),
			display.main_text,
			display.hover_text,
			display.rank.map(|rank| format!(" | rank #{rank}")).unwrap_or_default(),
		);
	}
	Ok(())
}
