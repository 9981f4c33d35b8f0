use crate::{
	components::{Icon, SkillBar},
	data::ComputedStats,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct StatsViewerProps {
	pub stats: Rc<ComputedStats>,
}

/// Provides the computed stats to every widget and lists a [`SkillBar`] per displayable entity.
#[function_component]
pub fn StatsViewer(StatsViewerProps { stats }: &StatsViewerProps) -> Html {
	let widgets = stats
		.entries()
		.map(|(name, category)| {
			let icon = Icon::for_entry(name, category);
			html! {
				<SkillBar key={format!("{category}/{name}")} skill={name.to_owned()} {category} {icon} />
			}
		})
		.collect::<Html>();
	html! {
		<ContextProvider<Rc<ComputedStats>> context={stats.clone()}>
			<div class="skills">{widgets}</div>
		</ContextProvider<Rc<ComputedStats>>>
	}
}
