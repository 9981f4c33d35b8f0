use crate::{
	components::{Icon, Style, Tooltip},
	data::{Category, ComputedStats, ProgressDisplay},
	utility::capitalize,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SkillBarProps {
	/// Name of the skill, dungeon, or class being displayed.
	pub skill: AttrValue,
	pub category: Category,
	#[prop_or_default]
	pub icon: Icon,
}

/// Icon, name, level and progress bar of one entity from the shared [`ComputedStats`].
///
/// Renders nothing when the stats have no level for the entity.
#[function_component]
pub fn SkillBar(SkillBarProps { skill, category, icon }: &SkillBarProps) -> Html {
	let stats = use_context::<Rc<ComputedStats>>();
	let hovering = use_state_eq(|| false);

	let Some(stats) = stats else {
		log::warn!(target: "skill_bar", "No computed stats were provided for {skill:?}.");
		return html!();
	};
	let Some(level) = stats.select_level(skill.as_str(), *category) else {
		log::trace!(target: "skill_bar", "No {category} level for {skill:?}, skipping.");
		return html!();
	};
	let display = ProgressDisplay::derive(level, *category);
	let name = capitalize(skill.as_str());

	let onmouseover = Callback::from({
		let hovering = hovering.clone();
		move |_| hovering.set(true)
	});
	let onmouseleave = Callback::from({
		let hovering = hovering.clone();
		move |_| hovering.set(false)
	});

	let bar_style = Style::from([("--progress", display.progress)]);
	let text = stats.show_progress_text().then(|| {
		html! {
			<div class="skill-progress-text">{display.text(*hovering).to_owned()}</div>
		}
	});

	html! {
		<div class="skill-component" maxed={display.maxed.then_some("")} {onmouseover} {onmouseleave}>
			<Tooltip classes="skill-icon" content={display.rank_tooltip().map(AttrValue::from)}>
				{icon.to_html()}
				if display.shine {
					<div class="piece-shine" />
				}
			</Tooltip>
			<div class="skill-name">
				{format!("{name} ")}
				<span class="skill-level">{display.level_label.clone()}</span>
			</div>
			<div class="skill-bar" data-skill={name.clone()}>
				<div class="skill-progress-bar" style={bar_style} />
				{text}
			</div>
		</div>
	}
}
