use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Identifier assigned by the remote catalog. Never generated locally.
pub type GameId = i64;

/// A game record as known to the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub genre: String,
    /// Numeric value kept in textual form (e.g. "19.99").
    #[serde(deserialize_with = "price_text")]
    pub price: String,
    pub release_date: String,
    pub image_uri: String,
    /// Fields the remote returned that this client does not model.
    /// Preserved so that a merge keeps them intact.
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

/// Field values of a game without an id ("GameWithoutId" on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    pub name: String,
    pub genre: String,
    #[serde(deserialize_with = "price_text")]
    pub price: String,
    pub release_date: String,
    pub image_uri: String,
}

impl Game {
    /// Build a record from a draft and the id the remote assigned to it.
    pub fn from_draft(id: GameId, draft: GameDraft) -> Self {
        Self {
            id,
            name: draft.name,
            genre: draft.genre,
            price: draft.price,
            release_date: draft.release_date,
            image_uri: draft.image_uri,
            extra: Map::new(),
        }
    }

    /// Editable copy of this record's fields.
    pub fn draft(&self) -> GameDraft {
        GameDraft {
            name: self.name.clone(),
            genre: self.genre.clone(),
            price: self.price.clone(),
            release_date: self.release_date.clone(),
            image_uri: self.image_uri.clone(),
        }
    }

    /// Case-insensitive substring match on the name. An empty query matches.
    pub fn name_matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }

    /// Merge submitted fields over this record. The id and any unmodelled
    /// fields are left untouched.
    pub fn apply(&mut self, draft: &GameDraft) {
        self.name.clone_from(&draft.name);
        self.genre.clone_from(&draft.genre);
        self.price.clone_from(&draft.price);
        self.release_date.clone_from(&draft.release_date);
        self.image_uri.clone_from(&draft.image_uri);
    }
}

/// Accepts the price either as a JSON string or a JSON number.
fn price_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Price {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Price::deserialize(deserializer)? {
        Price::Text(text) => text,
        Price::Number(number) => number.to_string(),
    })
}
