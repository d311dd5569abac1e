//! 출력 형식.

use anyhow::{Context, Result};
use serde::Serialize;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow::anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// JSON 형식 출력.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize to JSON")
}

/// 마지막 `limit`개만 남깁니다. 0이면 전체.
pub fn tail<T>(items: &[T], limit: usize) -> &[T] {
    if limit == 0 || items.len() <= limit {
        items
    } else {
        &items[items.len() - limit..]
    }
}
