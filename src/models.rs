use crate::{genre, helper};
use aidoku::{
	alloc::{String, Vec},
	Chapter, ContentRating, Manga, MangaStatus, Page, PageContent, UpdateStrategy, Viewer,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

// Deserializes a field, falling back to its default if the value has the wrong type.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned + Default,
{
	let value = Value::deserialize(deserializer)?;
	Ok(serde_json::from_value(value).unwrap_or_default())
}

// Decodes each array element on its own, skipping the ones that don't fit.
fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let value = Value::deserialize(deserializer)?;
	Ok(match value {
		Value::Array(values) => values
			.into_iter()
			.filter_map(|value| serde_json::from_value(value).ok())
			.collect(),
		_ => Vec::new(),
	})
}

#[derive(Default, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TaddyComicResults {
	// kept raw so unusable entries still count towards the page size
	#[serde(deserialize_with = "lenient")]
	pub comicseries: Vec<Value>,
}

impl TaddyComicResults {
	pub fn entry_count(&self) -> usize {
		self.comicseries.len()
	}

	pub fn into_comics(self) -> impl Iterator<Item = TaddyComic> {
		self.comicseries
			.into_iter()
			.filter_map(|value| serde_json::from_value(value).ok())
	}
}

#[derive(Default, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TaddyComic {
	#[serde(deserialize_with = "lenient")]
	pub name: Option<String>,
	#[serde(deserialize_with = "lenient")]
	pub sss_url: String,
	#[serde(deserialize_with = "lenient")]
	pub description: String,
	#[serde(deserialize_with = "lenient_vec")]
	pub genres: Vec<String>,
	#[serde(deserialize_with = "lenient_vec")]
	pub creators: Vec<String>,
	#[serde(deserialize_with = "lenient")]
	pub cover_image: TaddyImage,
	#[serde(deserialize_with = "lenient")]
	pub url: String,
	#[serde(deserialize_with = "lenient_vec")]
	pub issues: Vec<TaddyIssue>,
}

#[derive(Default, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TaddyImage {
	#[serde(deserialize_with = "lenient")]
	pub base_url: String,
	#[serde(deserialize_with = "lenient")]
	pub cover_sm: String,
	#[serde(deserialize_with = "lenient")]
	pub story: String,
}

#[derive(Default, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TaddyIssue {
	#[serde(deserialize_with = "lenient")]
	pub identifier: String,
	#[serde(deserialize_with = "lenient")]
	pub name: Option<String>,
	#[serde(deserialize_with = "lenient")]
	pub date_published: String,
	#[serde(deserialize_with = "lenient_vec")]
	pub stories: Vec<TaddyStory>,
}

#[derive(Default, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", default)]
pub struct TaddyStory {
	#[serde(deserialize_with = "lenient")]
	pub story_image: TaddyImage,
}

impl TaddyImage {
	// both halves are needed to form a usable cover
	pub fn cover_url(&self) -> Option<String> {
		if self.base_url.is_empty() || self.cover_sm.is_empty() {
			None
		} else {
			let mut url = self.base_url.clone();
			url.push_str(&self.cover_sm);
			Some(url)
		}
	}

	pub fn story_url(&self) -> String {
		let mut url = self.base_url.clone();
		url.push_str(&self.story);
		url
	}
}

impl TaddyComic {
	pub fn title(&self, short: bool) -> String {
		let name = self.name.as_deref().unwrap_or("Unknown");
		if short {
			helper::shorten_title(name)
		} else {
			String::from(name)
		}
	}

	pub fn tags(&self) -> Vec<String> {
		self.genres
			.iter()
			.filter_map(|code| genre::label_for(code))
			.map(String::from)
			.collect()
	}

	/// The parent series url for chapter keys, preferring the issue feed's own `url`.
	pub fn series_url<'a>(&'a self, fallback: &'a str) -> &'a str {
		[self.url.as_str(), self.sss_url.as_str()]
			.into_iter()
			.find(|url| !url.is_empty())
			.unwrap_or(fallback)
	}

	pub fn into_manga(self, short_titles: bool) -> Manga {
		let title = self.title(short_titles);
		let tags = self.tags();
		let cover = self.cover_image.cover_url();
		let authors = if self.creators.is_empty() {
			None
		} else {
			Some(self.creators)
		};
		Manga {
			key: self.sss_url.clone(),
			title,
			cover,
			authors,
			description: Some(self.description),
			url: Some(self.sss_url),
			tags: Some(tags),
			status: MangaStatus::Ongoing,
			content_rating: ContentRating::Safe,
			viewer: Viewer::Webtoon,
			update_strategy: UpdateStrategy::Never,
			..Default::default()
		}
	}
}

impl TaddyIssue {
	/// Builds the chapter for the issue at `index` of `total` in api order.
	pub fn into_chapter(self, series_url: &str, index: usize, total: usize) -> Chapter {
		let key = helper::chapter_key(series_url, &self.identifier);
		Chapter {
			url: Some(key.clone()),
			key,
			title: Some(self.name.unwrap_or_else(|| String::from("Unknown"))),
			chapter_number: Some((total - index) as f32),
			date_uploaded: Some(helper::parse_date(&self.date_published)),
			..Default::default()
		}
	}

	pub fn pages(&self) -> Vec<Page> {
		self.stories
			.iter()
			.map(|story| Page {
				content: PageContent::url(story.story_image.story_url()),
				..Default::default()
			})
			.collect()
	}
}
