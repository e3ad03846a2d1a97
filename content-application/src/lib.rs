//! 课程目录应用层（content-application）
//!
//! - 命令抽象（`command`、`command_handler`）与进程内命令总线（`inmemory_command_bus`）
//! - 应用上下文（`context`）与错误（`error`）
//! - 输出 DTO（`dto`）
//! - 课程写用例（`commands`）：`CriarCursoCommand` 及其处理器
//!
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod commands;
pub mod context;
pub mod dto;
pub mod error;
pub mod inmemory_command_bus;

pub use commands::{CriarCursoCommand, CriarCursoCommandHandler};
pub use inmemory_command_bus::InMemoryCommandBus;
