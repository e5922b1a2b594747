// src/config.rs
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// API base path, e.g. `http://localhost:5000/api`
    pub base_url: String,
    /// Directory holding the fixture images attached to multipart probes
    pub fixture_dir: PathBuf,
    /// Where the finished report is written
    pub report_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:5000/api".to_string());
        let fixture_dir = env::var("FIXTURE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let report_path = env::var("REPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("test_report.json"));

        Ok(Config {
            base_url,
            fixture_dir,
            report_path,
        })
    }
}
