use std::sync::Arc;

use async_trait::async_trait;
use content_domain::{ConteudoProgramatico, Curso, CursoRepository};

use crate::command::Command;
use crate::command_handler::CommandHandler;
use crate::commands::CriarCursoCommand;
use crate::context::AppContext;
use crate::dto::CursoDto;
use crate::error::AppError;

/// 创建课程处理器
///
/// 校验 → 构造内容大纲与课程 → 持久化 → 投影为 `CursoDto`。
/// 不重试、不幂等：同一命令执行两次会创建两门课程。
pub struct CriarCursoCommandHandler<R: CursoRepository> {
    repository: Arc<R>,
}

impl<R: CursoRepository> CriarCursoCommandHandler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CommandHandler<CriarCursoCommand> for CriarCursoCommandHandler<R>
where
    R: CursoRepository + 'static,
{
    async fn handle(&self, ctx: &AppContext, cmd: CriarCursoCommand) -> Result<CursoDto, AppError> {
        tracing::debug!(command = CriarCursoCommand::NAME, biz = %ctx.biz, nome = %cmd.nome, "handling command");

        if let Err(err) = cmd.validar() {
            tracing::warn!(command = CriarCursoCommand::NAME, biz = %ctx.biz, %err, "command rejected");
            return Err(err);
        }

        let CriarCursoCommand {
            nome,
            descricao_conteudo,
            objetivos,
            pre_requisitos,
            preco,
            duracao,
            nivel,
        } = cmd;

        let conteudo = ConteudoProgramatico::new(descricao_conteudo, objetivos, pre_requisitos)?;
        let curso = Curso::new(nome, conteudo, preco, duracao, nivel)?;

        // 取消时丢弃仍在进行中的持久化 future
        let persisted = tokio::select! {
            biased;
            _ = ctx.cancellation.cancelled() => {
                tracing::warn!(command = CriarCursoCommand::NAME, biz = %ctx.biz, "cancelled before course was persisted");
                return Err(AppError::Cancelled(CriarCursoCommand::NAME));
            }
            res = self.repository.add(curso) => res?,
        };

        let dto = CursoDto::try_from(&persisted)?;

        tracing::info!(
            command = CriarCursoCommand::NAME,
            biz = %ctx.biz,
            curso_id = dto.id,
            titulo = %dto.titulo,
            "curso created"
        );

        Ok(dto)
    }
}
