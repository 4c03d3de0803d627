use std::{net::SocketAddr, path::PathBuf};

pub const DEFAULT_DB_PATH: &str = "gamestore.db";
pub const DEFAULT_LISTEN: &str = "0.0.0.0:5000";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub listen: SocketAddr,
}

impl AppConfig {
    /// sqlx connection URL for the configured database file.
    pub fn database_url(&self) -> String {
        format!("sqlite://{}", self.db_path.display())
    }

    /// Directory that must exist before the database file can be created.
    pub fn db_dir(&self) -> Option<&std::path::Path> {
        self.db_path.parent().filter(|p| !p.as_os_str().is_empty())
    }
}
