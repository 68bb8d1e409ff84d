use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;

/// A quoted person.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub name: String,
    pub bio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<CalendarDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub death_date: Option<CalendarDate>,
    pub profession: String,
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// A topic quotes are filed under.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A single quote. References exactly one author and one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    pub text: String,
    pub author_id: String,
    pub category_id: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_daily_quote: bool,
    /// ISO date of the day this quote served as daily quote.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_quote_date: Option<String>,
    #[serde(default)]
    pub likes_count: u32,
}

impl Author {
    /// Age in whole years on `date`, or at death when a death date is known.
    pub fn age_on(&self, date: &CalendarDate) -> Option<u32> {
        let birth = self.birth_date?;
        let end = self.death_date.unwrap_or(*date);
        Some(birth.years_until(&end))
    }

    /// Short life-span label such as `1879–1955` or `b. 1955`.
    pub fn lifespan_label(&self) -> Option<String> {
        match (self.birth_date, self.death_date) {
            (Some(b), Some(d)) => Some(format!("{}–{}", b.year, d.year)),
            (Some(b), None) => Some(format!("b. {}", b.year)),
            (None, Some(d)) => Some(format!("d. {}", d.year)),
            (None, None) => None,
        }
    }
}
