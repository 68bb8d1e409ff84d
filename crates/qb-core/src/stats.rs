use serde::Serialize;

use crate::catalog::Catalog;
use crate::model::Category;

/// Totals shown on the overview and topics pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub quotes: usize,
    pub authors: usize,
    pub categories: usize,
    pub max_quotes_per_category: usize,
    /// Mean quotes per category, rounded to the nearest whole number.
    pub avg_quotes_per_category: usize,
}

pub fn catalog_stats(catalog: &Catalog) -> CatalogStats {
    let counts: Vec<usize> = catalog
        .categories()
        .iter()
        .map(|c| catalog.count_by_category(&c.id))
        .collect();
    let total: usize = counts.iter().sum();
    let avg = if counts.is_empty() {
        0
    } else {
        (total as f64 / counts.len() as f64).round() as usize
    };

    CatalogStats {
        quotes: catalog.quotes().len(),
        authors: catalog.authors().len(),
        categories: catalog.categories().len(),
        max_quotes_per_category: counts.iter().copied().max().unwrap_or(0),
        avg_quotes_per_category: avg,
    }
}

/// Category with the most quotes; the earliest in store order wins a tie.
pub fn most_popular_category(catalog: &Catalog) -> Option<&Category> {
    let mut best: Option<(&Category, usize)> = None;
    for category in catalog.categories() {
        let count = catalog.count_by_category(&category.id);
        if best.is_none_or(|(_, n)| count > n) {
            best = Some((category, count));
        }
    }
    best.map(|(c, _)| c)
}

/// The `n` categories with the most quotes, highest first.
pub fn top_categories(catalog: &Catalog, n: usize) -> Vec<(&Category, usize)> {
    let mut ranked: Vec<(&Category, usize)> = catalog
        .categories()
        .iter()
        .map(|c| (c, catalog.count_by_category(&c.id)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}
