//! Ranking policy constants
//!
//! Every tunable number used by the feed pipeline lives here so the policy
//! can be read and tested in one place. None of these are runtime-configurable.

use chrono::Duration;

/// Weight of bio keyword overlap in the composite score
pub const BIO_WEIGHT: f64 = 0.6;

/// Weight of check-in freshness in the composite score
pub const RECENCY_WEIGHT: f64 = 0.4;

/// Check-ins younger than this score full recency
pub const RECENCY_FRESH_MINUTES: i64 = 15;

/// Check-ins at least this old score zero recency
pub const RECENCY_CUTOFF_MINUTES: i64 = 4 * 60;

/// Default half-width of the viewer's accepted age range, in years
pub const DEFAULT_AGE_DELTA: u8 = 10;

/// Nobody younger than this is ever shown, whatever the viewer asks for
pub const MIN_ELIGIBLE_AGE: u8 = 18;

/// Bio tokens shorter than this (in characters) carry no signal
pub const MIN_KEYWORD_LEN: usize = 3;

/// 32-bit FNV-1a offset basis
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// 32-bit FNV-1a prime
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Mulberry32 state increment
pub const MULBERRY32_INCREMENT: u32 = 0x6D2B_79F5;

/// Portuguese function words and filler verbs dropped from bios.
/// Tokens shorter than [`MIN_KEYWORD_LEN`] are already discarded, so only longer words are listed.
pub const STOPWORDS: &[&str] = &[
    "aos", "aquela", "aquele", "aqui", "até", "bem", "com", "como", "das", "dela",
    "dele", "depois", "dos", "ela", "elas", "ele", "eles", "essa", "esse", "esta",
    "estar", "este", "estou", "está", "gosto", "isso", "mais", "mas", "meu",
    "meus", "minha", "minhas", "muito", "muita", "nas", "nem", "nos", "não", "num",
    "numa", "onde", "para", "pela", "pelo", "pra", "porque", "por", "quando", "que",
    "quem", "sem", "ser", "seu", "seus", "sou", "sua", "suas", "também", "tem",
    "tenho", "ter", "toda", "todo", "tudo", "uma", "umas", "uns", "você", "adoro",
    "amo", "curto", "faço", "fazer",
];

/// Length of the flat "fresh" plateau
pub fn recency_fresh_window() -> Duration {
    Duration::minutes(RECENCY_FRESH_MINUTES)
}

/// Presence age at which recency reaches zero
pub fn recency_cutoff() -> Duration {
    Duration::minutes(RECENCY_CUTOFF_MINUTES)
}
