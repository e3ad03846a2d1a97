//! 持久化端口（persist）
//!
//! 定义课程仓储接口（`CursoRepository`），以及一个进程内实现
//! （`InMemoryCursoRepository`），用于测试与演示。
//!
//! 具体存储后端（如 Postgres）由上层提供实现并注入。
//!
mod curso_repository;
mod inmemory_curso_repository;

pub use curso_repository::CursoRepository;
pub use inmemory_curso_repository::InMemoryCursoRepository;
