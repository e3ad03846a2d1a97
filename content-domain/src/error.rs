//! 领域层统一错误定义
//!
//! 聚焦值对象/实体构造校验与仓储等最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（课程目录领域最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },

    // --- 领域规则/状态 ---
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 通用 ---
    #[error("invalid id: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub(crate) fn invalid_value(reason: impl Into<String>) -> Self {
        DomainError::InvalidValue {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl From<std::num::ParseIntError> for DomainError {
    fn from(err: std::num::ParseIntError) -> Self {
        DomainError::InvalidId(err.to_string())
    }
}
