use std::collections::HashSet;
use std::sync::OnceLock;

use ammonia::Builder;

/// Reduces a title to ASCII letters, digits, whitespace and `/`.
///
/// Tags are dropped first so their names do not leak into the text.
pub fn title(input: &str) -> String {
	let text = tag_stripper().clean(input).to_string();
	let text = ["&amp;", "&lt;", "&gt;", "&nbsp;"]
		.iter()
		.fold(text, |text, entity| text.replace(entity, " "));

	let filtered: String = text
		.chars()
		.filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || *c == '/')
		.collect();
	filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn tag_stripper() -> &'static Builder<'static> {
	static STRIPPER: OnceLock<Builder<'static>> = OnceLock::new();
	STRIPPER.get_or_init(|| {
		let mut builder = Builder::default();
		builder.tags(HashSet::new());
		builder
	})
}
