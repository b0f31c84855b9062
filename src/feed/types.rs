use serde::Deserialize;
use std::fmt;

/// Outrights response: one record per player in the field.
#[derive(Debug, Clone, Deserialize)]
pub struct OutrightsResponse {
    #[serde(default)]
    pub event_name: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub market: Option<String>,
    pub odds: Vec<PlayerOdds>,
}

/// A player record. The feed keys players by `dg_id`; a `player_id`, when
/// present, wins over it.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawPlayerOdds")]
pub struct PlayerOdds {
    pub player_id: PlayerId,
    pub player_name: String,
    pub books: Vec<BookOdds>,
}

#[derive(Deserialize)]
struct RawPlayerOdds {
    #[serde(default)]
    player_id: Option<PlayerId>,
    #[serde(default)]
    dg_id: Option<PlayerId>,
    player_name: String,
    #[serde(default)]
    books: Vec<BookOdds>,
}

impl TryFrom<RawPlayerOdds> for PlayerOdds {
    type Error = String;

    fn try_from(raw: RawPlayerOdds) -> Result<Self, Self::Error> {
        let player_id = raw
            .player_id
            .or(raw.dg_id)
            .ok_or_else(|| format!("player {} has neither player_id nor dg_id", raw.player_name))?;
        Ok(PlayerOdds {
            player_id,
            player_name: raw.player_name,
            books: raw.books,
        })
    }
}

/// One bookmaker's line for a player. Both fields stay raw: only the record
/// that is actually selected gets interpreted, so junk in other books is
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookOdds {
    #[serde(default)]
    pub book: serde_json::Value,
    #[serde(default)]
    pub odds: serde_json::Value,
}

impl BookOdds {
    pub fn name(&self) -> Option<&str> {
        self.book.as_str()
    }

    /// The price as an American odds integer. Accepts whole JSON numbers and
    /// signed strings such as "+380".
    pub fn american(&self) -> Option<i64> {
        match &self.odds {
            serde_json::Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Opaque player identifier. The feed sends numeric ids but the table
/// column is matched as text, so both JSON numbers and strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "RawPlayerId")]
pub struct PlayerId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPlayerId {
    Int(i64),
    Text(String),
}

impl From<RawPlayerId> for PlayerId {
    fn from(raw: RawPlayerId) -> Self {
        match raw {
            RawPlayerId::Int(n) => PlayerId(n.to_string()),
            RawPlayerId::Text(s) => PlayerId(s),
        }
    }
}

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        PlayerId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PlayerOdds {
    /// First record whose book name is exactly `book`. Records after it are
    /// never looked at.
    pub fn book_record(&self, book: &str) -> Option<&BookOdds> {
        self.books.iter().find(|b| b.name() == Some(book))
    }

    /// Odds from the first book named exactly `book`. A matching record
    /// without a usable price yields `None`.
    pub fn odds_from(&self, book: &str) -> Option<i64> {
        self.book_record(book).and_then(BookOdds::american)
    }
}
