//! Plain-text rendering of catalog records for the terminal.

use qb_core::{Author, CalendarDate, Catalog, Category, Quote, share_text};

/// `"text" - Author  [Topic] 1247 likes (quote_1)`
pub fn quote_line(catalog: &Catalog, quote: &Quote) -> String {
    let topic = catalog
        .find_category(&quote.category_id)
        .map(|c| c.name.as_str())
        .unwrap_or("?");
    format!(
        "{}  [{}] {} likes ({})",
        share_text(catalog, quote),
        topic,
        quote.likes_count,
        quote.id
    )
}

pub fn author_line(catalog: &Catalog, author: &Author) -> String {
    let count = catalog.count_by_author(&author.id);
    format!(
        "{} ({}, {})  {} {}  [{}]",
        author.name,
        author.profession,
        author.nationality,
        count,
        plural(count, "quote"),
        author.id
    )
}

pub fn topic_line(catalog: &Catalog, category: &Category) -> String {
    let count = catalog.count_by_category(&category.id);
    format!(
        "{}: {}  {} {}  [{}]",
        category.name,
        category.description,
        count,
        plural(count, "quote"),
        category.id
    )
}

/// Header line shown above search results.
pub fn search_summary(query: &str, total: usize, shown: usize) -> String {
    if shown == 0 {
        format!("No quotes found for \"{query}\"")
    } else if shown == total {
        format!("{total} {} for \"{query}\"", plural(total, "result"))
    } else {
        format!(
            "{shown} of {total} {} for \"{query}\"",
            plural(total, "result")
        )
    }
}

pub fn author_details(author: &Author, today: &CalendarDate) -> Vec<String> {
    let mut lines = vec![
        format!("{} [{}]", author.name, author.id),
        format!("{}, {}", author.profession, author.nationality),
    ];
    if let Some(birth) = author.birth_date {
        let mut line = format!("Born {birth}");
        if let Some(death) = author.death_date {
            line.push_str(&format!(", died {death}"));
        }
        if let Some(age) = author.age_on(today) {
            line.push_str(&format!(" (age {age})"));
        }
        lines.push(line);
    }
    if !author.bio.is_empty() {
        lines.push(author.bio.clone());
    }
    lines
}

pub fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
