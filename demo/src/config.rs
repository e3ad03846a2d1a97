//! 演示程序配置
//!
//! 从环境变量读取；若当前目录存在 `.env` 文件则先加载。

use anyhow::{Context, Result, bail};

const LOG_VAR: &str = "CATALOGO_LOG";
const FIRST_ID_VAR: &str = "CATALOGO_PRIMEIRO_ID";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// tracing 过滤表达式，如 `info`、`content_application=debug`
    pub log_filter: String,
    /// 内存仓储分配的第一个课程标识
    pub first_course_id: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            first_course_id: 1,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // 没有 .env 不算错误
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_filter = lookup(LOG_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let first_course_id = match lookup(FIRST_ID_VAR) {
            Some(raw) => {
                let id: u64 = raw.trim().parse().with_context(|| {
                    format!("{FIRST_ID_VAR} must be a positive integer, got {raw:?}")
                })?;
                if id == 0 {
                    bail!("{FIRST_ID_VAR} must be a positive integer, got {raw:?}");
                }
                id
            }
            None => defaults.first_course_id,
        };

        Ok(Self {
            log_filter,
            first_course_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            (LOG_VAR, "debug"),
            (FIRST_ID_VAR, " 500 "),
        ]))
        .unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.first_course_id, 500);
    }

    #[test]
    fn rejects_invalid_first_id() {
        let err = Config::from_lookup(lookup(&[(FIRST_ID_VAR, "-3")])).unwrap_err();
        assert!(err.to_string().contains(FIRST_ID_VAR));
    }

    #[test]
    fn rejects_zero_first_id() {
        let err = Config::from_lookup(lookup(&[(FIRST_ID_VAR, "0")])).unwrap_err();
        assert!(err.to_string().contains(FIRST_ID_VAR));
    }
}
