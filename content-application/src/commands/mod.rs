//! 课程目录的写用例：命令及其处理器
//!
mod criar_curso;
mod criar_curso_handler;

pub use criar_curso::CriarCursoCommand;
pub use criar_curso_handler::CriarCursoCommandHandler;
