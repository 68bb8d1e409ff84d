use std::collections::HashMap;
use std::fmt;

use crate::model::{Author, Category, Quote};

/// Validation failure while assembling a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    DuplicateId { kind: &'static str, id: String },
    UnknownAuthor { quote_id: String, author_id: String },
    UnknownCategory { quote_id: String, category_id: String },
    LifespanOrder { author_id: String },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::DuplicateId { kind, id } => write!(f, "duplicate {kind} id: {id}"),
            CatalogError::UnknownAuthor {
                quote_id,
                author_id,
            } => write!(f, "quote {quote_id} references unknown author {author_id}"),
            CatalogError::UnknownCategory {
                quote_id,
                category_id,
            } => write!(
                f,
                "quote {quote_id} references unknown category {category_id}"
            ),
            CatalogError::LifespanOrder { author_id } => {
                write!(f, "author {author_id} has a death date that does not follow the birth date")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable in-memory store of authors, categories and quotes.
///
/// Collections keep their load order ("store order"); every query that
/// returns a sequence preserves it unless it explicitly sorts. A catalog
/// only exists once all three collections have passed validation, so
/// readers never see a partially loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    authors: Vec<Author>,
    categories: Vec<Category>,
    quotes: Vec<Quote>,
    author_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
    quote_index: HashMap<String, usize>,
}

fn index_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, CatalogError> {
    let mut index = HashMap::new();
    for (i, id) in ids.enumerate() {
        if index.insert(id.to_string(), i).is_some() {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(index)
}

impl Catalog {
    pub fn new(
        authors: Vec<Author>,
        categories: Vec<Category>,
        quotes: Vec<Quote>,
    ) -> Result<Self, CatalogError> {
        let author_index = index_ids("author", authors.iter().map(|a| a.id.as_str()))?;
        let category_index = index_ids("category", categories.iter().map(|c| c.id.as_str()))?;
        let quote_index = index_ids("quote", quotes.iter().map(|q| q.id.as_str()))?;

        for author in &authors {
            if let (Some(birth), Some(death)) = (author.birth_date, author.death_date)
                && death <= birth
            {
                return Err(CatalogError::LifespanOrder {
                    author_id: author.id.clone(),
                });
            }
        }

        for quote in &quotes {
            if !author_index.contains_key(&quote.author_id) {
                return Err(CatalogError::UnknownAuthor {
                    quote_id: quote.id.clone(),
                    author_id: quote.author_id.clone(),
                });
            }
            if !category_index.contains_key(&quote.category_id) {
                return Err(CatalogError::UnknownCategory {
                    quote_id: quote.id.clone(),
                    category_id: quote.category_id.clone(),
                });
            }
        }

        Ok(Self {
            authors,
            categories,
            quotes,
            author_index,
            category_index,
            quote_index,
        })
    }

    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    // --- Lookup ---

    pub fn find_author(&self, id: &str) -> Option<&Author> {
        self.author_index.get(id).map(|&i| &self.authors[i])
    }

    pub fn find_category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    pub fn find_quote(&self, id: &str) -> Option<&Quote> {
        self.quote_index.get(id).map(|&i| &self.quotes[i])
    }

    /// Display name of a quote's author, if it resolves.
    pub fn author_name(&self, quote: &Quote) -> Option<&str> {
        self.find_author(&quote.author_id).map(|a| a.name.as_str())
    }

    // --- Relation ---

    pub fn quotes_by_author(&self, author_id: &str) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|q| q.author_id == author_id)
            .collect()
    }

    pub fn quotes_by_category(&self, category_id: &str) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|q| q.category_id == category_id)
            .collect()
    }

    // --- Counts ---

    pub fn count_by_author(&self, author_id: &str) -> usize {
        self.quotes
            .iter()
            .filter(|q| q.author_id == author_id)
            .count()
    }

    pub fn count_by_category(&self, category_id: &str) -> usize {
        self.quotes
            .iter()
            .filter(|q| q.category_id == category_id)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::CalendarDate;

    fn author(id: &str) -> Author {
        Author {
            id: id.into(),
            name: id.to_uppercase(),
            bio: String::new(),
            birth_date: None,
            death_date: None,
            profession: "Writer".into(),
            nationality: "Nowhere".into(),
            image_url: None,
        }
    }

    fn category(id: &str) -> Category {
        Category {
            id: id.into(),
            name: id.to_uppercase(),
            description: String::new(),
        }
    }

    fn quote(id: &str, author_id: &str, category_id: &str) -> Quote {
        Quote {
            id: id.into(),
            text: format!("text of {id}"),
            author_id: author_id.into(),
            category_id: category_id.into(),
            is_featured: false,
            is_daily_quote: false,
            daily_quote_date: None,
            likes_count: 0,
        }
    }

    fn small() -> Catalog {
        Catalog::new(
            vec![author("a1"), author("a2")],
            vec![category("c1"), category("c2")],
            vec![
                quote("q1", "a1", "c1"),
                quote("q2", "a2", "c1"),
                quote("q3", "a1", "c2"),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_find_author_and_category() {
        let cat = small();
        assert_eq!(cat.find_author("a2").unwrap().name, "A2");
        assert_eq!(cat.find_category("c1").unwrap().name, "C1");
        assert!(cat.find_author("missing").is_none());
        assert!(cat.find_category("").is_none());
    }

    #[test]
    fn test_relations_keep_store_order() {
        let cat = small();
        let ids: Vec<&str> = cat.quotes_by_author("a1").iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q3"]);
        let ids: Vec<&str> = cat.quotes_by_category("c1").iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["q1", "q2"]);
        assert!(cat.quotes_by_author("nobody").is_empty());
    }

    #[test]
    fn test_counts() {
        let cat = small();
        assert_eq!(cat.count_by_author("a1"), 2);
        assert_eq!(cat.count_by_category("c2"), 1);
        assert_eq!(cat.count_by_category("c9"), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![author("a1"), author("a1")], vec![], vec![]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateId {
                kind: "author",
                id: "a1".into()
            }
        );
    }

    #[test]
    fn test_dangling_references_rejected() {
        let err = Catalog::new(
            vec![author("a1")],
            vec![category("c1")],
            vec![quote("q1", "ghost", "c1")],
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownAuthor { .. }));

        let err = Catalog::new(
            vec![author("a1")],
            vec![category("c1")],
            vec![quote("q1", "a1", "ghost")],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "quote q1 references unknown category ghost"
        );
    }

    #[test]
    fn test_death_before_birth_rejected() {
        let mut a = author("a1");
        a.birth_date = Some(CalendarDate::parse("1900-01-02").unwrap());
        a.death_date = Some(CalendarDate::parse("1900-01-01").unwrap());
        let err = Catalog::new(vec![a], vec![], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::LifespanOrder { .. }));
    }

    #[test]
    fn test_same_day_birth_and_death_rejected() {
        let mut a = author("a1");
        a.birth_date = Some(CalendarDate::parse("1900-01-01").unwrap());
        a.death_date = Some(CalendarDate::parse("1900-01-01").unwrap());
        let err = Catalog::new(vec![a.clone()], vec![], vec![]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "author a1 has a death date that does not follow the birth date"
        );

        a.death_date = Some(CalendarDate::parse("1900-01-02").unwrap());
        assert!(Catalog::new(vec![a], vec![], vec![]).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        let cat = Catalog::default();
        assert!(cat.quotes().is_empty());
        assert!(cat.find_author("a1").is_none());
    }
}
