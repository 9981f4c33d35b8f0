use enumset::{EnumSet, EnumSetType};
use std::fmt::Display;

#[derive(thiserror::Error, Debug)]
#[error("Invalid value {0:?}, expected one of: {names:?}", names = .1.iter().map(|v| v.to_string()).collect::<Vec<_>>())]
pub struct InvalidEnumStr<T: EnumSetType + Display>(String, EnumSet<T>);
impl<S, T> From<S> for InvalidEnumStr<T>
where
	T: EnumSetType + Display,
	S: Into<String>,
{
	fn from(value: S) -> Self {
		Self(value.into(), EnumSet::all())
	}
}
impl<T: EnumSetType + Display> InvalidEnumStr<T> {
	pub fn value(&self) -> &str {
		&self.0
	}
}
