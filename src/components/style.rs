use std::collections::BTreeMap;
use yew::AttrValue;

/// Inline style declarations, including css variables like `--progress`.
#[derive(Clone, PartialEq, Default, Debug)]
pub struct Style(BTreeMap<String, String>);

impl<I, K, V> From<I> for Style
where
	I: IntoIterator<Item = (K, V)>,
	K: ToString,
	V: ToString,
{
	fn from(value: I) -> Self {
		Self(value.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
	}
}

impl Style {
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn to_css(&self) -> String {
		self.0.iter().map(|(key, value)| format!("{key}: {value};")).collect()
	}
}

impl yew::html::IntoPropValue<Option<AttrValue>> for Style {
	fn into_prop_value(self) -> Option<AttrValue> {
		match self.is_empty() {
			true => None,
			false => Some(self.to_css().into()),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn progress_variable() {
		let style = Style::from([("--progress", 0.24)]);
		assert_eq!(style.to_css(), "--progress: 0.24;");
	}

	#[test]
	fn sorted_declarations() {
		let style = Style::from([("background-image", "url(/head/abc)"), ("--progress", "1")]);
		assert_eq!(style.to_css(), "--progress: 1;background-image: url(/head/abc);");
	}
}
