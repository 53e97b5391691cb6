use aidoku::alloc::{String, Vec};
use chrono::NaiveDateTime;

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

// removes bracketed and parenthetical parts, e.g. "Foo [Official] (2023)" -> "Foo"
pub fn shorten_title(title: &str) -> String {
	let mut depth = 0usize;
	let mut stripped = String::with_capacity(title.len());
	for c in title.chars() {
		match c {
			'[' | '(' => depth += 1,
			']' | ')' if depth > 0 => depth -= 1,
			_ if depth == 0 => stripped.push(c),
			_ => {}
		}
	}
	let short = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
	if short.is_empty() {
		String::from(title.trim())
	} else {
		short
	}
}

/// Parses a timestamp like `2023-05-01T12:00:00.000Z` into unix seconds, or 0 if it doesn't match.
pub fn parse_date(date: &str) -> i64 {
	NaiveDateTime::parse_from_str(date, DATE_FORMAT)
		.map(|d| d.and_utc().timestamp())
		.unwrap_or(0)
}

// chapter keys are "{series_url}#{issue_identifier}"
pub fn chapter_key(series_url: &str, identifier: &str) -> String {
	let mut key = String::with_capacity(series_url.len() + identifier.len() + 1);
	key.push_str(series_url);
	key.push('#');
	key.push_str(identifier);
	key
}

/// Splits a chapter key into the series url to request and the issue identifier.
///
/// Keys without an identifier have no pages, so they yield `None`.
pub fn split_chapter_key(key: &str) -> Option<(&str, &str)> {
	key.rsplit_once('#')
		.filter(|(url, identifier)| !url.is_empty() && !identifier.is_empty())
}

/// Maps a taddy series feed link to its manga key, ignoring the scheme, a `www.` host and any fragment.
pub fn series_key_from_link(url: &str) -> Option<String> {
	const HOST: &str = "taddy.org";
	const FEED_PATH: &str = "/feeds/";

	let rest = url
		.strip_prefix("https://")
		.or_else(|| url.strip_prefix("http://"))?;
	let rest = rest.strip_prefix("www.").unwrap_or(rest);
	let path = rest.strip_prefix(HOST)?;
	let path = path.split('#').next().unwrap_or_default();

	if path.starts_with(FEED_PATH) && !path.contains("/directory/") {
		let mut key = String::from("https://");
		key.push_str(HOST);
		key.push_str(path);
		Some(key)
	} else {
		None
	}
}
