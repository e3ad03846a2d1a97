//! 课程目录领域层（content-domain）
//!
//! 提供课程目录的领域模型与端口：
//! - 实体（`entity`）与课程实体 `Curso`（`curso`）
//! - 值对象（`value_object`）与内容大纲 `ConteudoProgramatico`
//! - 业务上下文（`business_context`），随命令传递的审计/追踪信息
//! - 课程仓储端口与进程内实现（`persist`）
//!
//! 本 crate 与存储和传输实现解耦，仅定义领域规则与最小必要的错误类型。
//!
pub mod business_context;
pub mod conteudo_programatico;
pub mod curso;
pub mod entity;
pub mod error;
pub mod persist;
pub mod value_object;

pub use business_context::BusinessContext;
pub use conteudo_programatico::ConteudoProgramatico;
pub use curso::{Curso, CursoId, StatusCurso};
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use persist::{CursoRepository, InMemoryCursoRepository};
