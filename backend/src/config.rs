#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_dir: std::path::PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(8080);

        let data_dir = std::env::var("DATA_DIR")
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|_| std::path::PathBuf::from("./data"));

        Self { port, data_dir }
    }

    /// The single board document lives in one file under the data directory.
    pub fn board_file(&self) -> std::path::PathBuf {
        self.data_dir.join("db.json")
    }
}
