// src/report.rs

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

use crate::error::{AppError, AppResult};

/// 1プローブ分の記録。作成後は変更されない
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub endpoint: String,
    pub test: String,
    pub status_code: u16,
    pub response: Value,
}

/// プローブ結果を呼び出し順に蓄積するレポート
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub timestamp: String,
    pub tests: Vec<TestCase>,
}

impl Report {
    pub fn new() -> Self {
        Report {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            tests: Vec::new(),
        }
    }

    /// Append one probe outcome. Order of calls is preserved in `tests`.
    pub fn record(
        &mut self,
        endpoint: impl Into<String>,
        test: impl Into<String>,
        status_code: u16,
        response: Value,
    ) {
        self.tests.push(TestCase {
            endpoint: endpoint.into(),
            test: test.into(),
            status_code,
            response,
        });
    }

    /// Serialize the accumulated report pretty-printed to `path`.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        // serde_json::to_string_pretty は Serialize 実装が失敗しない限りエラーにならない
        let json = serde_json::to_string_pretty(self).map_err(|e| AppError::ReportWrite {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        std::fs::write(path, json).map_err(|source| AppError::ReportWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}
