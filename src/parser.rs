use crate::models::{TaddyComic, TaddyComicResults, TaddyIssue};
use crate::PAGE_SIZE;
use aidoku::{
	alloc::{String, Vec},
	prelude::*,
	AidokuError, Chapter, Manga, MangaPageResult, Page, Result,
};
use hashbrown::HashMap;
use serde::de::DeserializeOwned;

fn from_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T> {
	serde_json::from_slice::<T>(data).map_err(|_| AidokuError::JsonParseError)
}

// parse a directory listing or search response
pub fn parse_manga_list(data: &[u8], short_titles: bool) -> Result<MangaPageResult> {
	let response = from_slice::<TaddyComicResults>(data)?;

	// taddy doesn't report a total, so a full page is assumed to have a successor
	let has_next_page = response.entry_count() == PAGE_SIZE;
	let entries = response
		.into_comics()
		.map(|comic| comic.into_manga(short_titles))
		.collect::<Vec<Manga>>();

	Ok(MangaPageResult {
		entries,
		has_next_page,
	})
}

pub fn parse_manga_details(data: &[u8], short_titles: bool) -> Result<Manga> {
	from_slice::<TaddyComic>(data).map(|comic| comic.into_manga(short_titles))
}

/// Parses a series' issues into chapters, oldest first.
///
/// The api lists issues newest first, so the issue at index `i` of `n` is chapter `n - i`.
pub fn parse_chapter_list(data: &[u8], manga_key: &str) -> Result<Vec<Chapter>> {
	let comic = from_slice::<TaddyComic>(data)?;
	let series_url = String::from(comic.series_url(manga_key));

	let total = comic.issues.len();
	let mut chapters = comic
		.issues
		.into_iter()
		.enumerate()
		.map(|(i, issue)| issue.into_chapter(&series_url, i, total))
		.collect::<Vec<Chapter>>();
	chapters.reverse();

	Ok(chapters)
}

pub fn parse_page_list(data: &[u8], identifier: &str) -> Result<Vec<Page>> {
	let comic = from_slice::<TaddyComic>(data)?;

	// the first issue wins if an identifier repeats
	let mut issues = HashMap::<&str, &TaddyIssue>::with_capacity(comic.issues.len());
	for issue in &comic.issues {
		issues.entry(issue.identifier.as_str()).or_insert(issue);
	}

	match issues.get(identifier) {
		Some(issue) if !identifier.is_empty() => Ok(issue.pages()),
		_ => {
			println!("[taddyink] no issue found for identifier \"{identifier}\"");
			Ok(Vec::new())
		}
	}
}
