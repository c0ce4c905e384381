use chrono::Utc;
use uuid::Uuid;

const ADMIN_TOKEN_LEN: usize = 6;
const ADMIN_TOKEN_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn new_event_id() -> String {
    Uuid::now_v7().to_string()
}

/// Six upper-case alphanumerics drawn from a v4 UUID's random bytes.
///
/// Short enough to sit in a shared link; it is a hint, not a secret.
pub fn new_admin_token() -> String {
    Uuid::new_v4()
        .as_bytes()
        .iter()
        .take(ADMIN_TOKEN_LEN)
        .map(|byte| char::from(ADMIN_TOKEN_ALPHABET[usize::from(*byte) % ADMIN_TOKEN_ALPHABET.len()]))
        .collect()
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
