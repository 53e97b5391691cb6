#![no_std]
use aidoku::{
	alloc::{String, Vec},
	imports::{
		error::AidokuError,
		net::{set_rate_limit, Request, TimeUnit},
	},
	prelude::*,
	Chapter, DeepLinkHandler, DeepLinkResult, FilterValue, Listing, ListingProvider, Manga,
	MangaPageResult, Page, Result, Source,
};

mod filter;
mod genre;
mod helper;
mod models;
mod parser;
mod settings;

use filter::SearchFilters;

const BASE_URL: &str = "https://taddy.org";

// taddy has no total count, so a full page of this size implies another page
const PAGE_SIZE: usize = 25;

struct TaddyInk;

impl Source for TaddyInk {
	fn new() -> Self {
		set_rate_limit(4, 1, TimeUnit::Seconds);
		Self
	}

	fn get_search_manga_list(
		&self,
		query: Option<String>,
		page: i32,
		filters: Vec<FilterValue>,
	) -> Result<MangaPageResult> {
		let filters = SearchFilters::from_values(filters);
		let lang = settings::get_language();

		let url = filter::get_url(page, query.as_deref(), &filters, &lang);

		let data = Request::get(url)?.get_data()?;
		parser::parse_manga_list(&data, settings::get_short_titles())
	}

	fn get_manga_update(
		&self,
		mut manga: Manga,
		needs_details: bool,
		needs_chapters: bool,
	) -> Result<Manga> {
		if !needs_details && !needs_chapters {
			return Ok(manga);
		}

		// the series feed carries both the details and the issues
		let data = Request::get(&manga.key)?.get_data()?;

		if needs_details {
			manga.copy_from(parser::parse_manga_details(
				&data,
				settings::get_short_titles(),
			)?);
		}

		if needs_chapters {
			manga.chapters = Some(parser::parse_chapter_list(&data, &manga.key)?);
		}

		Ok(manga)
	}

	fn get_page_list(&self, _manga: Manga, chapter: Chapter) -> Result<Vec<Page>> {
		let Some((series_url, identifier)) = helper::split_chapter_key(&chapter.key) else {
			return Ok(Vec::new());
		};
		let data = Request::get(series_url)?.get_data()?;
		parser::parse_page_list(&data, identifier)
	}
}

impl ListingProvider for TaddyInk {
	fn get_manga_list(&self, listing: Listing, page: i32) -> Result<MangaPageResult> {
		match listing.id.as_str() {
			"popular" => {
				let url = filter::get_list_url(page, &settings::get_language());
				let data = Request::get(url)?.get_data()?;
				parser::parse_manga_list(&data, settings::get_short_titles())
			}
			// there is no latest updates feed
			_ => Err(AidokuError::Unimplemented),
		}
	}
}

impl DeepLinkHandler for TaddyInk {
	fn handle_deep_link(&self, url: String) -> Result<Option<DeepLinkResult>> {
		// series keys are their feed urls
		Ok(helper::series_key_from_link(&url).map(|key| DeepLinkResult::Manga { key }))
	}
}

register_source!(TaddyInk, ListingProvider, DeepLinkHandler);

#[cfg(test)]
mod test {
	use super::*;
	use aidoku_test::aidoku_test;

	#[aidoku_test]
	fn deep_link_to_series_feed() {
		let result = TaddyInk
			.handle_deep_link("https://taddy.org/feeds/sss/comicseries/abc#issue".into())
			.unwrap();
		assert!(matches!(
			result,
			Some(DeepLinkResult::Manga { key }) if key == "https://taddy.org/feeds/sss/comicseries/abc"
		));
	}

	#[aidoku_test]
	fn deep_link_accepts_http_and_www() {
		for url in [
			"http://taddy.org/feeds/sss/comicseries/abc",
			"https://www.taddy.org/feeds/sss/comicseries/abc",
		] {
			let result = TaddyInk.handle_deep_link(url.into()).unwrap();
			assert!(matches!(
				result,
				Some(DeepLinkResult::Manga { key }) if key == "https://taddy.org/feeds/sss/comicseries/abc"
			));
		}
	}

	#[aidoku_test]
	fn deep_link_ignores_other_urls() {
		for url in [
			"https://taddy.org/feeds/directory/list",
			"https://taddy.org/about",
			"https://example.com/feeds/x",
			"ftp://taddy.org/feeds/x",
		] {
			assert!(TaddyInk.handle_deep_link(url.into()).unwrap().is_none());
		}
	}
}
