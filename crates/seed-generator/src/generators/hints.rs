//! Name-hint tables.
//!
//! Each table is an ordered list of `(keywords, generator)` entries. A field
//! matches an entry when its lower-cased name contains any of the entry's
//! keywords, or for [`MatchOn::Word`] entries when one of the name's words
//! (split on camelCase and separators) equals a keyword; the first matching
//! entry wins. Specific entries therefore come
//! before broad ones (`username` before the catch-all `name`).
//!
//! String hints, in evaluation order:
//!
//! | # | entry | keywords |
//! |---|-------|----------|
//! | 1 | email | `email`, `e_mail` |
//! | 2 | first name | `firstname`, `first_name`, `given_name`, `forename` |
//! | 3 | last name | `lastname`, `last_name`, `surname`, `family_name` |
//! | 4 | username | `username`, `user_name`, `login`, `handle` |
//! | 5 | full name | `fullname`, `full_name`, `displayname`, `display_name` |
//! | 6 | phone | `phone`, `mobile`, `fax` |
//! | 7 | street address | `address`, `street` |
//! | 8 | city | `city`, `town` |
//! | 9 | country | `country` |
//! | 10 | postal code | `zip`, `postal`, `postcode` |
//! | 11 | url | `url`, `website`, `homepage`, `link` |
//! | 12 | title | `title`, `headline`, `subject` |
//! | 13 | description | `description`, `bio`, `content`, `summary`, `comment`, `body` |
//! | 14 | password | `password`, `passwd`, `hash`, `secret` |
//! | 15 | identifier | `uuid`, `guid`, `identifier` |
//! | 16 | person name | `name` |

use crate::generators::{numeric, text, timestamp};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use seed_core::SeedValue;

/// How a hint's keywords are compared with a field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOn {
    /// Lower-cased name contains the keyword
    Substring,
    /// One of the name's words equals the keyword
    Word,
}

/// One entry of a hint table.
pub struct Hint<G> {
    /// Short label, used in logs
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    pub match_on: MatchOn,
    pub generate: G,
}

impl<G> Hint<G> {
    fn matches(&self, lower_name: &str, words: &[String]) -> bool {
        match self.match_on {
            MatchOn::Substring => self.keywords.iter().any(|k| lower_name.contains(k)),
            MatchOn::Word => self
                .keywords
                .iter()
                .any(|k| words.iter().any(|w| w == k)),
        }
    }
}

/// Split a field name into lower-cased words at separators and
/// lower-to-upper case transitions (`pageCount` -> `page`, `count`).
pub fn name_words(field_name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in field_name.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// Find the first entry of `table` matching `field_name`.
pub fn match_hint<'a, G>(table: &'a [Hint<G>], field_name: &str) -> Option<&'a Hint<G>> {
    let lower = field_name.to_lowercase();
    let words = name_words(field_name);
    table.iter().find(|hint| hint.matches(&lower, &words))
}

pub type StringGenerator = fn(&mut StdRng) -> String;

pub type NumberGenerator = fn(&mut StdRng) -> SeedValue;

/// Date generators receive the reference instant and the configured `max`.
pub type DateGenerator = fn(&mut StdRng, DateTime<Utc>, Option<f64>) -> DateTime<Utc>;

pub const STRING_HINTS: &[Hint<StringGenerator>] = &[
    Hint {
        label: "email",
        keywords: &["email", "e_mail"],
        match_on: MatchOn::Substring,
        generate: text::email::<StdRng>,
    },
    Hint {
        label: "first_name",
        keywords: &["firstname", "first_name", "given_name", "forename"],
        match_on: MatchOn::Substring,
        generate: text::first_name::<StdRng>,
    },
    Hint {
        label: "last_name",
        keywords: &["lastname", "last_name", "surname", "family_name"],
        match_on: MatchOn::Substring,
        generate: text::last_name::<StdRng>,
    },
    Hint {
        label: "username",
        keywords: &["username", "user_name", "login", "handle"],
        match_on: MatchOn::Substring,
        generate: text::username::<StdRng>,
    },
    Hint {
        label: "full_name",
        keywords: &["fullname", "full_name", "displayname", "display_name"],
        match_on: MatchOn::Substring,
        generate: text::full_name::<StdRng>,
    },
    Hint {
        label: "phone",
        keywords: &["phone", "mobile", "fax"],
        match_on: MatchOn::Substring,
        generate: text::phone::<StdRng>,
    },
    Hint {
        label: "street_address",
        keywords: &["address", "street"],
        match_on: MatchOn::Substring,
        generate: text::street_address::<StdRng>,
    },
    Hint {
        label: "city",
        keywords: &["city", "town"],
        match_on: MatchOn::Substring,
        generate: text::city::<StdRng>,
    },
    Hint {
        label: "country",
        keywords: &["country"],
        match_on: MatchOn::Substring,
        generate: text::country::<StdRng>,
    },
    Hint {
        label: "postal_code",
        keywords: &["zip", "postal", "postcode"],
        match_on: MatchOn::Substring,
        generate: text::postal_code::<StdRng>,
    },
    Hint {
        label: "url",
        keywords: &["url", "website", "homepage", "link"],
        match_on: MatchOn::Substring,
        generate: text::url::<StdRng>,
    },
    Hint {
        label: "title",
        keywords: &["title", "headline", "subject"],
        match_on: MatchOn::Substring,
        generate: text::title::<StdRng>,
    },
    Hint {
        label: "description",
        keywords: &["description", "bio", "content", "summary", "comment", "body"],
        match_on: MatchOn::Substring,
        generate: text::paragraph::<StdRng>,
    },
    Hint {
        label: "password",
        keywords: &["password", "passwd", "hash", "secret"],
        match_on: MatchOn::Substring,
        generate: text::password::<StdRng>,
    },
    Hint {
        label: "identifier",
        keywords: &["uuid", "guid", "identifier"],
        match_on: MatchOn::Substring,
        generate: text::uuid::<StdRng>,
    },
    Hint {
        label: "name",
        keywords: &["name"],
        match_on: MatchOn::Substring,
        generate: text::full_name::<StdRng>,
    },
];

/// `age` matches whole words only, so `pageCount` or `usage` are not ages.
pub const NUMBER_HINTS: &[Hint<NumberGenerator>] = &[
    Hint {
        label: "percentage",
        keywords: &["percent"],
        match_on: MatchOn::Substring,
        generate: numeric::percentage::<StdRng>,
    },
    Hint {
        label: "price",
        keywords: &["price", "cost", "amount"],
        match_on: MatchOn::Substring,
        generate: numeric::price::<StdRng>,
    },
    Hint {
        label: "rating",
        keywords: &["rating", "score"],
        match_on: MatchOn::Substring,
        generate: numeric::rating::<StdRng>,
    },
    Hint {
        label: "age",
        keywords: &["age"],
        match_on: MatchOn::Word,
        generate: numeric::age::<StdRng>,
    },
];

/// Days back covered by `created`/`updated` dates without a configured `max`.
pub const DEFAULT_RECENT_DAYS: i64 = 365;

/// Days covered by unhinted dates.
pub const DEFAULT_DATE_DAYS: i64 = 30;

fn birth_date(rng: &mut StdRng, now: DateTime<Utc>, _max: Option<f64>) -> DateTime<Utc> {
    timestamp::birthdate(rng, now)
}

fn audit_date(rng: &mut StdRng, now: DateTime<Utc>, max: Option<f64>) -> DateTime<Utc> {
    let days = timestamp::days_from_config(max, DEFAULT_RECENT_DAYS);
    timestamp::recent(rng, now, days)
}

fn future_date(rng: &mut StdRng, now: DateTime<Utc>, max: Option<f64>) -> DateTime<Utc> {
    let days = timestamp::days_from_config(max, DEFAULT_RECENT_DAYS);
    timestamp::soon(rng, now, days)
}

fn past_date(rng: &mut StdRng, now: DateTime<Utc>, max: Option<f64>) -> DateTime<Utc> {
    let days = timestamp::days_from_config(max, DEFAULT_RECENT_DAYS);
    timestamp::recent(rng, now, days)
}

pub const DATE_HINTS: &[Hint<DateGenerator>] = &[
    Hint {
        label: "birthdate",
        keywords: &["birth", "dob"],
        match_on: MatchOn::Substring,
        generate: birth_date,
    },
    Hint {
        label: "audit",
        keywords: &["created", "updated"],
        match_on: MatchOn::Substring,
        generate: audit_date,
    },
    Hint {
        label: "future",
        keywords: &["future", "expire", "expiry", "deadline"],
        match_on: MatchOn::Substring,
        generate: future_date,
    },
    Hint {
        label: "past",
        keywords: &["past"],
        match_on: MatchOn::Substring,
        generate: past_date,
    },
];
