//! 实体（Entity）基础抽象
//!
//! 为实体提供统一的标识（Id）能力；标识由仓储在持久化时分配。
//!
use std::{fmt::Display, str::FromStr};

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型，要求可解析、可显示与可克隆
    type Id: FromStr + Clone + Display;

    /// 获取实体标识；尚未持久化的实体返回 `None`
    fn id(&self) -> Option<&Self::Id>;

    /// 是否为尚未持久化（未分配标识）的瞬态实体
    fn is_transient(&self) -> bool {
        self.id().is_none()
    }
}
