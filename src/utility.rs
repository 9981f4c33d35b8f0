mod error;
pub use error::*;
mod number;
pub use number::*;

/// Upper-cases the first character of a name, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
	let mut chars = name.chars();
	match chars.next() {
		None => String::new(),
		Some(first) => first.to_uppercase().chain(chars).collect(),
	}
}
