use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct TooltipProps {
	#[prop_or_default]
	pub classes: Classes,
	/// Html content of the tooltip; no tooltip is attached when absent.
	#[prop_or_default]
	pub content: Option<AttrValue>,
	#[prop_or_default]
	pub children: Children,
}

/// A container which the page's tippy setup turns into a tooltip target.
#[function_component]
pub fn Tooltip(
	TooltipProps {
		classes,
		content,
		children,
	}: &TooltipProps,
) -> Html {
	html! {
		<div class={classes.clone()} data-tippy-content={content.clone()}>
			{children.clone()}
		</div>
	}
}
