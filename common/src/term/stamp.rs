//! Generation-time values: the city/date line and the cosmetic term id.

use chrono::{DateTime, FixedOffset, Local, Locale};
use uuid::Uuid;

/// City printed in front of the generation date.
pub const CITY: &str = "São Paulo";

const TERM_ID_LEN: usize = 6;
const TERM_ID_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// When a term was generated and the short id printed on it.
///
/// Production code uses [`Stamp::now`]; tests pin both values.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    pub issued_at: DateTime<FixedOffset>,
    pub term_id: String,
}

impl Stamp {
    pub fn now() -> Self {
        Self {
            issued_at: Local::now().into(),
            term_id: short_term_id(),
        }
    }

    /// `"São Paulo, "` followed by the long date.
    pub fn city_date(&self) -> String {
        format!("{}, {}", CITY, long_date(&self.issued_at))
    }
}

/// Long pt-BR date: weekday, day, month name and year.
pub fn long_date(at: &DateTime<FixedOffset>) -> String {
    at.format_localized("%A, %-d de %B de %Y", Locale::pt_BR)
        .to_string()
}

/// Six characters from `0-9A-Z`. Not unique, not stored.
pub fn short_term_id() -> String {
    term_id_from_bytes(Uuid::new_v4().as_bytes())
}

fn term_id_from_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .take(TERM_ID_LEN)
        .map(|b| TERM_ID_ALPHABET[usize::from(*b) % TERM_ID_ALPHABET.len()] as char)
        .collect()
}
