use crate::{genre::Genre, BASE_URL, PAGE_SIZE};
use aidoku::{
	alloc::{string::ToString, String, Vec},
	helpers::uri::QueryParameters,
	prelude::*,
	FilterValue,
};

const TADDY_TYPE: &str = "comicseries";

/// Search filters supported by the taddy directory.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SearchFilters {
	pub genre: Option<Genre>,
	pub creator: Option<String>,
	pub tags: Option<String>,
}

// keep only values with visible content
fn non_blank(value: String) -> Option<String> {
	let trimmed = value.trim();
	if trimmed.is_empty() {
		None
	} else {
		Some(String::from(trimmed))
	}
}

impl SearchFilters {
	pub fn from_values(filters: Vec<FilterValue>) -> Self {
		let mut result = Self::default();
		for filter in filters {
			match filter {
				FilterValue::Select { id, value } if id == "genre" => {
					result.genre = Genre::parse(&value).filter(|genre| !genre.is_blank());
				}
				FilterValue::Text { id, value } => match id.as_str() {
					"creator" => result.creator = non_blank(value),
					"tags" => result.tags = non_blank(value),
					_ => println!("[taddyink] ignoring unknown text filter \"{id}\""),
				},
				_ => continue,
			}
		}
		result
	}

	pub fn is_empty(&self) -> bool {
		self.genre.is_none() && self.creator.is_none() && self.tags.is_none()
	}
}

/// Directory listing sorted by popularity.
pub fn get_list_url(page: i32, lang: &str) -> String {
	let mut qs = QueryParameters::new();
	qs.push("taddyType", Some(TADDY_TYPE));
	qs.push("sort", Some("popular"));
	qs.push("lang", Some(lang));
	qs.push("page", Some(&page.to_string()));
	qs.push("limit", Some(&PAGE_SIZE.to_string()));
	format!("{BASE_URL}/feeds/directory/list?{qs}")
}

/// Keyword search. An empty query searches by the filters alone.
pub fn get_search_url(page: i32, query: &str, filters: &SearchFilters, lang: &str) -> String {
	let mut qs = QueryParameters::new();
	qs.push("q", Some(query));
	qs.push("lang", Some(lang));
	qs.push("taddyType", Some(TADDY_TYPE));
	qs.push("page", Some(&page.to_string()));
	qs.push("limit", Some(&PAGE_SIZE.to_string()));

	if let Some(genre) = filters.genre.filter(|genre| !genre.is_blank()) {
		qs.push("genre", Some(genre.code()));
	}
	if let Some(creator) = &filters.creator {
		qs.push("creator", Some(creator));
	}
	if let Some(tags) = &filters.tags {
		qs.push("tags", Some(tags));
	}

	format!("{BASE_URL}/feeds/directory/search?{qs}")
}

/// Picks the endpoint for a browse or search request.
///
/// A blank query with no active filter browses the popularity-sorted directory.
pub fn get_url(page: i32, query: Option<&str>, filters: &SearchFilters, lang: &str) -> String {
	match query.map(str::trim) {
		Some(query) if !query.is_empty() => get_search_url(page, query, filters, lang),
		_ if !filters.is_empty() => get_search_url(page, "", filters, lang),
		_ => get_list_url(page, lang),
	}
}
