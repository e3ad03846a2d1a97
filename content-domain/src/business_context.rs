use std::fmt;

use bon::Builder;
use serde::{Deserialize, Serialize};

/// 业务上下文信息
///
/// 随命令一起传递的审计与链路信息，不参与业务规则判断，
/// 仅用于日志、追踪与审计记录。
#[derive(Builder, Default, Debug, Clone, Serialize, Deserialize)]
pub struct BusinessContext {
    /// 关联ID
    correlation_id: Option<String>,
    /// 因果ID
    causation_id: Option<String>,
    /// 发起操作的主体类型（如用户、系统等）
    actor_type: Option<String>,
    /// 发起操作的主体ID
    actor_id: Option<String>,
}

impl BusinessContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn causation_id(&self) -> Option<&str> {
        self.causation_id.as_deref()
    }

    pub fn actor_type(&self) -> Option<&str> {
        self.actor_type.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    /// 未标明操作主体
    pub fn is_anonymous(&self) -> bool {
        self.actor_id.is_none()
    }
}

/// 紧凑形式，便于写入日志字段：`cor=<id> actor=<type>:<id>`
impl fmt::Display for BusinessContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cor={}", self.correlation_id().unwrap_or("-"))?;
        match (self.actor_type(), self.actor_id()) {
            (Some(t), Some(id)) => write!(f, " actor={t}:{id}"),
            (None, Some(id)) => write!(f, " actor={id}"),
            _ => write!(f, " actor=anonymous"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_actor() {
        let biz = BusinessContext::builder()
            .correlation_id("cor-1".into())
            .actor_type("user".into())
            .actor_id("u-9".into())
            .build();
        assert_eq!(biz.to_string(), "cor=cor-1 actor=user:u-9");
        assert!(!biz.is_anonymous());
    }

    #[test]
    fn display_anonymous_default() {
        let biz = BusinessContext::default();
        assert_eq!(biz.to_string(), "cor=- actor=anonymous");
        assert!(biz.is_anonymous());
    }
}
