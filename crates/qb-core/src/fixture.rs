//! The built-in dataset shipped with the binary.

use crate::catalog::{Catalog, CatalogError};
use crate::date::{CalendarDate, today_utc};
use crate::model::{Author, Category, Quote};

struct AuthorRow {
    id: &'static str,
    name: &'static str,
    bio: &'static str,
    born: &'static str,
    profession: &'static str,
    nationality: &'static str,
}

const AUTHORS: &[AuthorRow] = &[
    AuthorRow {
        id: "auth_einstein",
        name: "Albert Einstein",
        bio: "Theoretical physicist who developed the theory of relativity",
        born: "1879-03-14",
        profession: "Physicist",
        nationality: "German-American",
    },
    AuthorRow {
        id: "auth_jobs",
        name: "Steve Jobs",
        bio: "Co-founder and CEO of Apple Inc.",
        born: "1955-02-24",
        profession: "Entrepreneur",
        nationality: "American",
    },
    AuthorRow {
        id: "auth_gandhi",
        name: "Mahatma Gandhi",
        bio: "Leader of the Indian independence movement",
        born: "1869-10-02",
        profession: "Political Leader",
        nationality: "Indian",
    },
    AuthorRow {
        id: "auth_mandela",
        name: "Nelson Mandela",
        bio: "Anti-apartheid revolutionary and former President of South Africa",
        born: "1918-07-18",
        profession: "Political Leader",
        nationality: "South African",
    },
    AuthorRow {
        id: "auth_roosevelt",
        name: "Theodore Roosevelt",
        bio: "26th President of the United States",
        born: "1858-10-27",
        profession: "President",
        nationality: "American",
    },
    AuthorRow {
        id: "auth_churchill",
        name: "Winston Churchill",
        bio: "British Prime Minister during World War II",
        born: "1874-11-30",
        profession: "Prime Minister",
        nationality: "British",
    },
    AuthorRow {
        id: "auth_lincoln",
        name: "Abraham Lincoln",
        bio: "16th President of the United States",
        born: "1809-02-12",
        profession: "President",
        nationality: "American",
    },
    AuthorRow {
        id: "auth_king",
        name: "Martin Luther King Jr.",
        bio: "Civil rights leader",
        born: "1929-01-15",
        profession: "Civil Rights Leader",
        nationality: "American",
    },
    AuthorRow {
        id: "auth_disney",
        name: "Walt Disney",
        bio: "Animator and film producer",
        born: "1901-12-05",
        profession: "Animator",
        nationality: "American",
    },
    AuthorRow {
        id: "auth_ford",
        name: "Henry Ford",
        bio: "Founder of Ford Motor Company",
        born: "1863-07-30",
        profession: "Industrialist",
        nationality: "American",
    },
];

const CATEGORIES: &[(&str, &str, &str)] = &[
    ("cat_motivational", "Motivational", "Inspiring quotes to motivate and encourage"),
    ("cat_wisdom", "Wisdom", "Wise words and life lessons"),
    ("cat_success", "Success", "Quotes about achieving success and goals"),
    ("cat_happiness", "Happiness", "Quotes about joy and happiness"),
    ("cat_love", "Love", "Quotes about love and relationships"),
    ("cat_life", "Life", "Quotes about life and living"),
    ("cat_inspirational", "Inspirational", "Uplifting and inspiring quotes"),
    ("cat_leadership", "Leadership", "Quotes about leadership and management"),
    ("cat_education", "Education", "Quotes about learning and education"),
    ("cat_friendship", "Friendship", "Quotes about friendship and relationships"),
];

struct QuoteRow {
    id: &'static str,
    text: &'static str,
    author: &'static str,
    category: &'static str,
    featured: bool,
    daily: bool,
    likes: u32,
}

const QUOTES: &[QuoteRow] = &[
    QuoteRow {
        id: "quote_1",
        text: "Imagination is more important than knowledge.",
        author: "auth_einstein",
        category: "cat_wisdom",
        featured: true,
        daily: true,
        likes: 1247,
    },
    QuoteRow {
        id: "quote_2",
        text: "Innovation distinguishes between a leader and a follower.",
        author: "auth_jobs",
        category: "cat_leadership",
        featured: true,
        daily: false,
        likes: 892,
    },
    QuoteRow {
        id: "quote_3",
        text: "Be the change that you wish to see in the world.",
        author: "auth_gandhi",
        category: "cat_inspirational",
        featured: true,
        daily: false,
        likes: 2156,
    },
    QuoteRow {
        id: "quote_4",
        text: "It always seems impossible until it's done.",
        author: "auth_mandela",
        category: "cat_motivational",
        featured: true,
        daily: false,
        likes: 1834,
    },
    QuoteRow {
        id: "quote_5",
        text: "Believe you can and you're halfway there.",
        author: "auth_roosevelt",
        category: "cat_motivational",
        featured: true,
        daily: false,
        likes: 1456,
    },
    QuoteRow {
        id: "quote_6",
        text: "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        author: "auth_churchill",
        category: "cat_success",
        featured: true,
        daily: false,
        likes: 1678,
    },
    QuoteRow {
        id: "quote_7",
        text: "The best way to predict the future is to create it.",
        author: "auth_lincoln",
        category: "cat_wisdom",
        featured: false,
        daily: false,
        likes: 934,
    },
    QuoteRow {
        id: "quote_8",
        text: "Darkness cannot drive out darkness; only light can do that.",
        author: "auth_king",
        category: "cat_inspirational",
        featured: false,
        daily: false,
        likes: 1123,
    },
    QuoteRow {
        id: "quote_9",
        text: "All our dreams can come true, if we have the courage to pursue them.",
        author: "auth_disney",
        category: "cat_motivational",
        featured: false,
        daily: false,
        likes: 1567,
    },
    QuoteRow {
        id: "quote_10",
        text: "Whether you think you can or you think you can't, you're right.",
        author: "auth_ford",
        category: "cat_success",
        featured: false,
        daily: false,
        likes: 876,
    },
    QuoteRow {
        id: "quote_11",
        text: "Life is like riding a bicycle. To keep your balance, you must keep moving.",
        author: "auth_einstein",
        category: "cat_life",
        featured: false,
        daily: false,
        likes: 1234,
    },
    QuoteRow {
        id: "quote_12",
        text: "Your work is going to fill a large part of your life, and the only way to be truly satisfied is to do what you believe is great work.",
        author: "auth_jobs",
        category: "cat_success",
        featured: false,
        daily: false,
        likes: 1445,
    },
];

/// Build the built-in catalog. The daily quote is stamped with `today`.
pub fn catalog_for(today: CalendarDate) -> Result<Catalog, CatalogError> {
    let authors = AUTHORS
        .iter()
        .map(|row| Author {
            id: row.id.to_string(),
            name: row.name.to_string(),
            bio: row.bio.to_string(),
            birth_date: CalendarDate::parse(row.born).ok(),
            death_date: None,
            profession: row.profession.to_string(),
            nationality: row.nationality.to_string(),
            image_url: None,
        })
        .collect();

    let categories = CATEGORIES
        .iter()
        .map(|(id, name, description)| Category {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        })
        .collect();

    let quotes = QUOTES
        .iter()
        .map(|row| Quote {
            id: row.id.to_string(),
            text: row.text.to_string(),
            author_id: row.author.to_string(),
            category_id: row.category.to_string(),
            is_featured: row.featured,
            is_daily_quote: row.daily,
            daily_quote_date: row.daily.then(|| today.to_string()),
            likes_count: row.likes,
        })
        .collect();

    Catalog::new(authors, categories, quotes)
}

/// Built-in catalog with today's UTC date on the daily quote.
pub fn catalog() -> Result<Catalog, CatalogError> {
    catalog_for(today_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        let cat = catalog().unwrap();
        assert_eq!(cat.authors().len(), AUTHORS.len());
        assert_eq!(cat.categories().len(), CATEGORIES.len());
        assert_eq!(cat.quotes().len(), QUOTES.len());
    }

    #[test]
    fn test_fixture_passes_validation() {
        if let Err(e) = catalog() {
            panic!("built-in dataset is invalid: {e}");
        }
        for row in AUTHORS {
            assert!(CalendarDate::parse(row.born).is_ok(), "bad birth date on {}", row.id);
        }
    }

    #[test]
    fn test_daily_quote_stamped_with_today() {
        let day = CalendarDate::new(2026, 10, 16).unwrap();
        let cat = catalog_for(day).unwrap();
        let daily: Vec<&Quote> = cat.quotes().iter().filter(|q| q.is_daily_quote).collect();
        assert_eq!(daily.len(), 1);
        assert_eq!(daily[0].daily_quote_date.as_deref(), Some("2026-10-16"));
        assert!(cat.quotes()[1].daily_quote_date.is_none());
    }
}
