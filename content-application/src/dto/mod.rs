//! 输出 DTO
//!
//! 作为应用层的输出载体，面向接口/外部系统序列化友好；
//! 与领域模型解耦，避免将领域对象直接暴露到接口层。
//!
mod curso_dto;

pub use curso_dto::{AulaDto, CursoDto};
