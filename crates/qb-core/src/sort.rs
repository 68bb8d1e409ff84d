//! Comparator-based ordering of authors, categories and quotes.
//!
//! All sorts are stable and return a new vector; `Descending` negates the
//! comparator rather than reversing the output, so equal keys keep their
//! incoming relative order in both directions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::catalog::Catalog;
use crate::model::{Author, Category, Quote};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKeyError {
    kind: &'static str,
    input: String,
}

impl fmt::Display for ParseKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {} '{}'", self.kind, self.input)
    }
}

impl std::error::Error for ParseKeyError {}

macro_rules! keyword_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $text:literal $(| $alias:literal)*),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseKeyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($text $(| $alias)* => Ok($name::$variant),)+
                    _ => Err(ParseKeyError {
                        kind: $kind,
                        input: s.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

keyword_enum!(Direction, "sort order", {
    Ascending => "asc" | "ascending",
    Descending => "desc" | "descending",
});

impl Direction {
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorSortKey {
    #[default]
    Name,
    Profession,
    Nationality,
}

keyword_enum!(AuthorSortKey, "author sort key", {
    Name => "name",
    Profession => "profession",
    Nationality => "nationality",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySortKey {
    #[default]
    Name,
    Quotes,
}

keyword_enum!(CategorySortKey, "topic sort key", {
    Name => "name",
    Quotes => "quotes" | "count",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteSortKey {
    #[default]
    Relevance,
    Author,
    Likes,
}

keyword_enum!(QuoteSortKey, "quote sort key", {
    Relevance => "relevance",
    Author => "author",
    Likes => "likes",
});

/// Fold a character for primary-strength comparison: lowercase, Latin
/// diacritics removed.
fn fold_char(c: char) -> char {
    let c = lower_char(c);
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => 'a',
        'ç' | 'ć' | 'č' => 'c',
        'ď' | 'đ' => 'd',
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => 'e',
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => 'i',
        'ł' | 'ľ' => 'l',
        'ñ' | 'ń' | 'ň' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => 'o',
        'ř' => 'r',
        'ś' | 'š' | 'ş' => 's',
        'ť' | 'ţ' => 't',
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' => 'u',
        'ý' | 'ÿ' => 'y',
        'ź' | 'ż' | 'ž' => 'z',
        other => other,
    }
}

fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Locale-style string comparison.
///
/// Levels, in order: base letters (case and accents folded), then accents,
/// then case with lowercase first. So `"émile"` sorts next to `"Emile"`
/// rather than after `"z"`, and `"a"` sorts before `"A"`. The raw
/// comparison breaks whatever is left so the order is total.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(fold_char)
        .cmp(b.chars().map(fold_char))
        .then_with(|| a.chars().map(lower_char).cmp(b.chars().map(lower_char)))
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

fn author_field(author: &Author, key: AuthorSortKey) -> &str {
    match key {
        AuthorSortKey::Name => &author.name,
        AuthorSortKey::Profession => &author.profession,
        AuthorSortKey::Nationality => &author.nationality,
    }
}

pub fn sort_authors<'a>(
    authors: &[&'a Author],
    key: AuthorSortKey,
    direction: Direction,
) -> Vec<&'a Author> {
    let mut sorted = authors.to_vec();
    sorted.sort_by(|a, b| direction.apply(collate(author_field(a, key), author_field(b, key))));
    sorted
}

pub fn sort_categories<'a>(
    catalog: &Catalog,
    categories: &[&'a Category],
    key: CategorySortKey,
    direction: Direction,
) -> Vec<&'a Category> {
    let mut sorted = categories.to_vec();
    match key {
        CategorySortKey::Name => {
            sorted.sort_by(|a, b| direction.apply(collate(&a.name, &b.name)));
        }
        CategorySortKey::Quotes => {
            sorted.sort_by(|a, b| {
                direction.apply(
                    catalog
                        .count_by_category(&a.id)
                        .cmp(&catalog.count_by_category(&b.id)),
                )
            });
        }
    }
    sorted
}

/// Relevance of a quote to a search query: 2 when the text contains the
/// query (ignoring case), plus 1 when the quote is featured.
pub fn relevance_score(quote: &Quote, query_lower: &str) -> u8 {
    let text_hit = if quote.text.to_lowercase().contains(query_lower) {
        2
    } else {
        0
    };
    text_hit + u8::from(quote.is_featured)
}

/// Order quotes by `key`. `query` only matters for [`QuoteSortKey::Relevance`],
/// where `Descending` puts the best match first.
pub fn sort_quotes<'a>(
    catalog: &Catalog,
    quotes: &[&'a Quote],
    key: QuoteSortKey,
    direction: Direction,
    query: &str,
) -> Vec<&'a Quote> {
    let mut sorted = quotes.to_vec();
    match key {
        QuoteSortKey::Author => {
            sorted.sort_by(|a, b| {
                let name_a = catalog.author_name(a).unwrap_or("");
                let name_b = catalog.author_name(b).unwrap_or("");
                direction.apply(collate(name_a, name_b))
            });
        }
        QuoteSortKey::Likes => {
            sorted.sort_by(|a, b| direction.apply(a.likes_count.cmp(&b.likes_count)));
        }
        QuoteSortKey::Relevance => {
            let needle = query.to_lowercase();
            sorted.sort_by(|a, b| {
                direction.apply(relevance_score(a, &needle).cmp(&relevance_score(b, &needle)))
            });
        }
    }
    sorted
}
