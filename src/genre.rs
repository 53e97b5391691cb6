// (code, label) pairs in filter order. The leading blank entry is the "no filter" option.
pub const GENRES: &[(&str, &str)] = &[
	("", ""),
	("COMICSERIES_ACTION", "Action"),
	("COMICSERIES_COMEDY", "Comedy"),
	("COMICSERIES_DRAMA", "Drama"),
	("COMICSERIES_EDUCATIONAL", "Educational"),
	("COMICSERIES_FANTASY", "Fantasy"),
	("COMICSERIES_HISTORICAL", "Historical"),
	("COMICSERIES_HORROR", "Horror"),
	("COMICSERIES_INSPIRATIONAL", "Inspirational"),
	("COMICSERIES_MYSTERY", "Mystery"),
	("COMICSERIES_ROMANCE", "Romance"),
	("COMICSERIES_SCI_FI", "Sci-Fi"),
	("COMICSERIES_SLICE_OF_LIFE", "Slice Of Life"),
	("COMICSERIES_SUPERHERO", "Superhero"),
	("COMICSERIES_SUPERNATURAL", "Supernatural"),
	("COMICSERIES_WHOLESOME", "Wholesome"),
	("COMICSERIES_BL", "BL (Boy Love)"),
	("COMICSERIES_GL", "GL (Girl Love)"),
	("COMICSERIES_LGBTQ", "LGBTQ+"),
	("COMICSERIES_THRILLER", "Thriller"),
	("COMICSERIES_ZOMBIES", "Zombies"),
	("COMICSERIES_POST_APOCALYPTIC", "Post Apocalyptic"),
	("COMICSERIES_SCHOOL", "School"),
	("COMICSERIES_SPORTS", "Sports"),
	("COMICSERIES_ANIMALS", "Animals"),
	("COMICSERIES_GAMING", "Gaming"),
];

/// A selectable genre, stored as an index into [`GENRES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre(usize);

impl Genre {
	pub fn from_code(code: &str) -> Option<Self> {
		GENRES.iter().position(|(c, _)| *c == code).map(Self)
	}

	pub fn from_label(label: &str) -> Option<Self> {
		GENRES.iter().position(|(_, l)| *l == label).map(Self)
	}

	/// Resolves a filter value, which is either an api code or a display label.
	pub fn parse(value: &str) -> Option<Self> {
		Self::from_code(value).or_else(|| Self::from_label(value))
	}

	pub fn code(&self) -> &'static str {
		GENRES[self.0].0
	}

	pub fn label(&self) -> &'static str {
		GENRES[self.0].1
	}

	// the blank sentinel means no genre filter
	pub fn is_blank(&self) -> bool {
		self.0 == 0
	}
}

/// Display label for an api genre code. Unknown codes and the blank sentinel yield `None`.
pub fn label_for(code: &str) -> Option<&'static str> {
	Genre::from_code(code)
		.filter(|genre| !genre.is_blank())
		.map(|genre| genre.label())
}
