//! Quotebook query engine.
//!
//! An immutable catalog of authors, categories and quotes, plus the pure
//! lookup, relation, selection, ranking and aggregate functions the
//! browsing front ends call into.
//!
//! Zero I/O: no opinions about where the dataset comes from or how results
//! are rendered.

pub mod catalog;
pub mod date;
pub mod fixture;
pub mod interaction;
pub mod model;
pub mod select;
pub mod sort;
pub mod stats;
pub mod wire;

pub use catalog::{Catalog, CatalogError};
pub use date::{CalendarDate, DateError, MonthDay, today_utc};
pub use interaction::{LikeState, share_text};
pub use model::{Author, Category, Quote};
pub use select::{
    QuoteFilter, authors_born_on, daily_quote, featured_quotes, filter_authors, filter_categories,
    random_quote, search_quotes,
};
pub use sort::{
    AuthorSortKey, CategorySortKey, Direction, ParseKeyError, QuoteSortKey, collate,
    relevance_score, sort_authors, sort_categories, sort_quotes,
};
pub use stats::{CatalogStats, catalog_stats, most_popular_category, top_categories};
pub use wire::{CURRENT_VERSION, DatasetExport, WireError, export_json, import_json};
