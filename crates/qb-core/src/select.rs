//! Named subsets of the catalog: featured, daily, search hits, birthdays.
//!
//! Every selector returns records in store order. Ordering is a separate
//! step (see [`crate::sort`]).

use rand::Rng;

use crate::catalog::Catalog;
use crate::date::MonthDay;
use crate::model::{Author, Category, Quote};

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

pub fn featured_quotes(catalog: &Catalog) -> Vec<&Quote> {
    catalog.quotes().iter().filter(|q| q.is_featured).collect()
}

/// The first quote flagged as the current daily quote.
///
/// The dataset is expected to flag at most one, but nothing enforces it;
/// store order decides when several are flagged.
pub fn daily_quote(catalog: &Catalog) -> Option<&Quote> {
    catalog.quotes().iter().find(|q| q.is_daily_quote)
}

/// Quotes whose text, author name or category name contains `query`,
/// ignoring case.
pub fn search_quotes<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Quote> {
    let needle = query.to_lowercase();
    catalog
        .quotes()
        .iter()
        .filter(|q| {
            contains_folded(&q.text, &needle)
                || catalog
                    .find_author(&q.author_id)
                    .is_some_and(|a| contains_folded(&a.name, &needle))
                || catalog
                    .find_category(&q.category_id)
                    .is_some_and(|c| contains_folded(&c.name, &needle))
        })
        .collect()
}

/// Authors whose birthday (month and day, any year) is `target`.
pub fn authors_born_on(catalog: &Catalog, target: MonthDay) -> Vec<&Author> {
    catalog
        .authors()
        .iter()
        .filter(|a| a.birth_date.is_some_and(|b| b.month_day() == target))
        .collect()
}

/// Authors whose name, profession or nationality contains `query`.
pub fn filter_authors<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Author> {
    let needle = query.to_lowercase();
    catalog
        .authors()
        .iter()
        .filter(|a| {
            contains_folded(&a.name, &needle)
                || contains_folded(&a.profession, &needle)
                || contains_folded(&a.nationality, &needle)
        })
        .collect()
}

/// Categories whose name or description contains `query`.
pub fn filter_categories<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Category> {
    let needle = query.to_lowercase();
    catalog
        .categories()
        .iter()
        .filter(|c| contains_folded(&c.name, &needle) || contains_folded(&c.description, &needle))
        .collect()
}

/// Narrows a result list to one category and/or one author. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteFilter {
    pub category_id: Option<String>,
    pub author_id: Option<String>,
}

impl QuoteFilter {
    /// Filter from user selections, where `all` or an empty string means
    /// no restriction on that field.
    pub fn from_selection(category: Option<&str>, author: Option<&str>) -> Self {
        fn pick(value: Option<&str>) -> Option<String> {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
                .map(str::to_string)
        }
        Self {
            category_id: pick(category),
            author_id: pick(author),
        }
    }

    pub fn is_active(&self) -> bool {
        self.category_id.is_some() || self.author_id.is_some()
    }

    pub fn matches(&self, quote: &Quote) -> bool {
        self.category_id
            .as_deref()
            .is_none_or(|c| quote.category_id == c)
            && self
                .author_id
                .as_deref()
                .is_none_or(|a| quote.author_id == a)
    }

    pub fn apply<'a>(&self, quotes: &[&'a Quote]) -> Vec<&'a Quote> {
        if !self.is_active() {
            return quotes.to_vec();
        }
        quotes.iter().copied().filter(|q| self.matches(q)).collect()
    }
}

/// Uniformly random quote, skipping `exclude` (the one currently shown).
pub fn random_quote<'a>(
    catalog: &'a Catalog,
    rng: &mut impl Rng,
    exclude: Option<&str>,
) -> Option<&'a Quote> {
    let pool: Vec<&Quote> = catalog
        .quotes()
        .iter()
        .filter(|q| exclude != Some(q.id.as_str()))
        .collect();
    if pool.is_empty() {
        return None;
    }
    Some(pool[rng.random_range(0..pool.len())])
}
