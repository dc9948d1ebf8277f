//! Field rules applied to a draft before it is submitted.
//!
//! Validation is a pure function of the draft: it never reads the store or
//! talks to the remote. Every field is checked independently so that all
//! problems are reported together.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::game::GameDraft;

pub const NAME_MAX_CHARS: usize = 50;
pub const GENRE_MAX_CHARS: usize = 20;
pub const IMAGE_URI_MAX_CHARS: usize = 100;
pub const PRICE_MIN: f64 = 1.0;
pub const PRICE_MAX: f64 = 100.0;

static IMAGE_URI_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?|ftp)://[^\s/$.?#].[^\s]*$").unwrap());

/// Editable fields of a game, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Genre,
    Price,
    ImageUri,
    ReleaseDate,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Genre,
        Field::Price,
        Field::ImageUri,
        Field::ReleaseDate,
    ];

    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Genre => "genre",
            Field::Price => "price",
            Field::ImageUri => "imageUri",
            Field::ReleaseDate => "releaseDate",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Genre => "Genre",
            Field::Price => "Price",
            Field::ImageUri => "Image URL",
            Field::ReleaseDate => "Release Date",
        }
    }

    pub fn value(self, draft: &GameDraft) -> &str {
        match self {
            Field::Name => &draft.name,
            Field::Genre => &draft.genre,
            Field::Price => &draft.price,
            Field::ImageUri => &draft.image_uri,
            Field::ReleaseDate => &draft.release_date,
        }
    }

    pub fn value_mut(self, draft: &mut GameDraft) -> &mut String {
        match self {
            Field::Name => &mut draft.name,
            Field::Genre => &mut draft.genre,
            Field::Price => &mut draft.price,
            Field::ImageUri => &mut draft.image_uri,
            Field::ReleaseDate => &mut draft.release_date,
        }
    }

    pub fn next(self) -> Field {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Field {
        let index = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field → message for every violated rule. Empty means valid.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Check a draft against all field rules.
pub fn validate(draft: &GameDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let checks: [(Field, Option<&'static str>); 5] = [
        (Field::Name, check_name(&draft.name)),
        (Field::Genre, check_genre(&draft.genre)),
        (Field::Price, check_price(&draft.price)),
        (Field::ReleaseDate, check_release_date(&draft.release_date)),
        (Field::ImageUri, check_image_uri(&draft.image_uri)),
    ];

    for (field, message) in checks {
        if let Some(message) = message {
            errors.insert(field, message);
        }
    }

    errors
}

fn check_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        Some("Name is required.")
    } else if name.chars().count() > NAME_MAX_CHARS {
        Some("Name must be 50 characters or less.")
    } else {
        None
    }
}

fn check_genre(genre: &str) -> Option<&'static str> {
    if genre.is_empty() {
        Some("Genre is required.")
    } else if genre.chars().count() > GENRE_MAX_CHARS {
        Some("Genre must be 20 characters or less.")
    } else {
        None
    }
}

fn check_price(price: &str) -> Option<&'static str> {
    if price.is_empty() {
        return Some("Price is required.");
    }
    match parse_price(price) {
        Some(value) if (PRICE_MIN..=PRICE_MAX).contains(&value) => None,
        _ => Some("Price must be a number between 1 and 100."),
    }
}

fn check_release_date(release_date: &str) -> Option<&'static str> {
    if release_date.is_empty() {
        Some("Release Date is required.")
    } else {
        None
    }
}

fn check_image_uri(image_uri: &str) -> Option<&'static str> {
    if image_uri.is_empty() {
        Some("Image URL is required.")
    } else if !IMAGE_URI_PATTERN.is_match(image_uri) {
        Some("Image URL must be a valid URL.")
    } else if image_uri.chars().count() > IMAGE_URI_MAX_CHARS {
        Some("Image URL must be 100 characters or less.")
    } else {
        None
    }
}

/// Parse a price the way a form field is coerced to a number: surrounding
/// whitespace is ignored and non-finite values are rejected.
///
/// Only decimal notation (with an optional exponent) is accepted. Hex, octal
/// and binary literals such as `0x10` or `0b101` are not prices.
pub fn parse_price(price: &str) -> Option<f64> {
    let value: f64 = price.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> GameDraft {
        GameDraft {
            name: "Elden Ring".to_string(),
            genre: "RPG".to_string(),
            price: "50".to_string(),
            release_date: "2022-02-25".to_string(),
            image_uri: "https://img.example.com/elden.png".to_string(),
        }
    }

    fn only(field: Field, message: &'static str) -> FieldErrors {
        FieldErrors::from([(field, message)])
    }

    #[test]
    fn valid_draft_has_no_errors() {
        assert!(validate(&valid()).is_empty());
    }

    #[test]
    fn boundaries_are_inclusive() {
        let mut draft = valid();
        draft.name = "n".repeat(50);
        draft.genre = "g".repeat(20);
        draft.price = "1".to_string();
        assert!(validate(&draft).is_empty());

        draft.price = "100".to_string();
        assert!(validate(&draft).is_empty());

        draft.price = "99.99".to_string();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn empty_name_reports_only_name() {
        let draft = GameDraft {
            name: String::new(),
            genre: "RPG".to_string(),
            price: "50".to_string(),
            release_date: "2021-01-01".to_string(),
            image_uri: "http://a.com/b".to_string(),
        };
        assert_eq!(validate(&draft), only(Field::Name, "Name is required."));
    }

    #[test]
    fn long_name() {
        let mut draft = valid();
        draft.name = "n".repeat(51);
        assert_eq!(
            validate(&draft),
            only(Field::Name, "Name must be 50 characters or less.")
        );
    }

    #[test]
    fn name_length_counts_characters() {
        let mut draft = valid();
        draft.name = "é".repeat(50);
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn genre_rules() {
        let mut draft = valid();
        draft.genre = String::new();
        assert_eq!(validate(&draft), only(Field::Genre, "Genre is required."));

        draft.genre = "g".repeat(21);
        assert_eq!(
            validate(&draft),
            only(Field::Genre, "Genre must be 20 characters or less.")
        );
    }

    #[test]
    fn price_out_of_range() {
        let mut draft = valid();
        draft.price = "150".to_string();
        assert_eq!(
            validate(&draft),
            only(Field::Price, "Price must be a number between 1 and 100.")
        );

        draft.price = "0.5".to_string();
        assert_eq!(
            validate(&draft),
            only(Field::Price, "Price must be a number between 1 and 100.")
        );
    }

    #[test]
    fn price_not_a_number() {
        let mut draft = valid();
        for bad in ["abc", "   ", "NaN", "inf", "12abc"] {
            draft.price = bad.to_string();
            assert_eq!(
                validate(&draft),
                only(Field::Price, "Price must be a number between 1 and 100."),
                "price {bad:?}"
            );
        }
    }

    #[test]
    fn price_required() {
        let mut draft = valid();
        draft.price = String::new();
        assert_eq!(validate(&draft), only(Field::Price, "Price is required."));
    }

    #[test]
    fn price_tolerates_surrounding_whitespace() {
        let mut draft = valid();
        draft.price = " 42 ".to_string();
        assert!(validate(&draft).is_empty());
    }

    #[test]
    fn price_rejects_non_decimal_literals() {
        for literal in ["0x10", "0b101", "0o17"] {
            assert_eq!(parse_price(literal), None, "price {literal:?}");
        }
        assert_eq!(parse_price("1.5e1"), Some(15.0));
    }

    #[test]
    fn release_date_required() {
        let mut draft = valid();
        draft.release_date = String::new();
        assert_eq!(
            validate(&draft),
            only(Field::ReleaseDate, "Release Date is required.")
        );
    }

    #[test]
    fn image_uri_rules() {
        let mut draft = valid();
        draft.image_uri = String::new();
        assert_eq!(validate(&draft), only(Field::ImageUri, "Image URL is required."));

        for bad in ["example.com/a.png", "mailto:x@y.z", "http://", "http:// spaced.png", "http://.hidden"] {
            draft.image_uri = bad.to_string();
            assert_eq!(
                validate(&draft),
                only(Field::ImageUri, "Image URL must be a valid URL."),
                "uri {bad:?}"
            );
        }

        draft.image_uri = format!("https://example.com/{}", "a".repeat(90));
        assert_eq!(
            validate(&draft),
            only(Field::ImageUri, "Image URL must be 100 characters or less.")
        );
    }

    #[test]
    fn accepted_schemes() {
        let mut draft = valid();
        for good in ["http://a.com/b", "https://a.com/b.png", "ftp://files.local/c.jpg"] {
            draft.image_uri = good.to_string();
            assert!(validate(&draft).is_empty(), "uri {good:?}");
        }
    }

    #[test]
    fn all_violations_reported_together() {
        let errors = validate(&GameDraft::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[&Field::Name], "Name is required.");
        assert_eq!(errors[&Field::Genre], "Genre is required.");
        assert_eq!(errors[&Field::Price], "Price is required.");
        assert_eq!(errors[&Field::ReleaseDate], "Release Date is required.");
        assert_eq!(errors[&Field::ImageUri], "Image URL is required.");
    }

    #[test]
    fn field_focus_cycles() {
        assert_eq!(Field::Name.next(), Field::Genre);
        assert_eq!(Field::ReleaseDate.next(), Field::Name);
        assert_eq!(Field::Name.prev(), Field::ReleaseDate);
        assert_eq!(Field::ImageUri.as_str(), "imageUri");
    }
}
