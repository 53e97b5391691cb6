use aidoku::{
	alloc::{String, Vec},
	imports::defaults::defaults_get,
};

// settings keys
const TITLE_DISPLAY_KEY: &str = "titleDisplay";
const LANGUAGES_KEY: &str = "languages";

const DEFAULT_LANGUAGE: &str = "en";

pub fn get_short_titles() -> bool {
	defaults_get::<String>(TITLE_DISPLAY_KEY).is_some_and(|value| value == "short")
}

// taddy only filters by a single language, so use the first selected one
pub fn get_language() -> String {
	defaults_get::<Vec<String>>(LANGUAGES_KEY)
		.and_then(|languages| languages.into_iter().next())
		.unwrap_or_else(|| String::from(DEFAULT_LANGUAGE))
}
