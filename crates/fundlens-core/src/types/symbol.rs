//! 지수 별칭 및 심볼 해석.
//!
//! 대시보드는 "S&P 500" 같은 표시 이름을 보여주고, 데이터 제공자는 `^GSPC` 같은
//! 티커를 요구합니다. 별칭에 없는 입력(개별 주식 티커)은 대문자로만 정규화합니다.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 표시 이름 → 데이터 제공자 심볼 매핑.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolAliases(BTreeMap<String, String>);

impl Default for SymbolAliases {
    fn default() -> Self {
        let mut map = BTreeMap::new();
        map.insert("DJI".to_string(), "^DJI".to_string());
        map.insert("S&P 500".to_string(), "^GSPC".to_string());
        Self(map)
    }
}

impl SymbolAliases {
    /// 별칭 맵으로 생성합니다.
    pub fn new(map: BTreeMap<String, String>) -> Self {
        Self(map)
    }

    /// 표시 이름을 제공자 심볼로 변환합니다.
    pub fn resolve(&self, name: &str) -> String {
        let trimmed = name.trim();
        match self.0.get(trimmed) {
            Some(symbol) => symbol.clone(),
            None => trimmed.to_uppercase(),
        }
    }

    /// 등록된 지수 이름인지 확인합니다.
    pub fn is_index(&self, name: &str) -> bool {
        self.0.contains_key(name.trim())
    }

    /// 선택 가능한 지수 이름 목록.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_index_alias() {
        let aliases = SymbolAliases::default();
        assert_eq!(aliases.resolve("S&P 500"), "^GSPC");
        assert_eq!(aliases.resolve("DJI"), "^DJI");
        assert!(aliases.is_index("DJI"));
    }

    #[test]
    fn test_resolve_passthrough() {
        let aliases = SymbolAliases::default();
        assert_eq!(aliases.resolve(" amzn "), "AMZN");
        assert!(!aliases.is_index("AMZN"));
        assert_eq!(aliases.names().collect::<Vec<_>>(), vec!["DJI", "S&P 500"]);
    }
}
