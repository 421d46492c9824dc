pub mod config;
pub mod store;
pub mod templates;

pub mod pages;

pub struct AppState {
    pub storage: Box<dyn store::BoardStorage>,
    pub board: tokio::sync::Mutex<common::ScoreBoard>,
}

impl AppState {
    pub fn new(storage: Box<dyn store::BoardStorage>, board: common::ScoreBoard) -> Self {
        Self {
            storage,
            board: tokio::sync::Mutex::new(board),
        }
    }
}

/// Persists the updated board wholesale and swaps the in-memory copy for the
/// freshly reloaded file contents.
pub async fn save_and_reload(
    storage: &dyn store::BoardStorage,
    current: &mut common::ScoreBoard,
    updated: common::ScoreBoard,
) -> Result<(), String> {
    storage.save(updated).await?;
    *current = storage.load().await?;
    Ok(())
}

/// Percent-encodes a path segment, so team names survive a round trip through
/// redirect targets.
pub fn path_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                escaped.push(byte as char)
            }
            other => {
                escaped.push_str(&format!("%{:02X}", other));
            }
        }
    }
    escaped
}
