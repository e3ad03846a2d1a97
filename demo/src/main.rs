mod config;

use std::sync::Arc;

use anyhow::Result;
use content_application::command_bus::CommandBus;
use content_application::context::AppContext;
use content_application::error::AppError;
use content_application::{CriarCursoCommand, CriarCursoCommandHandler, InMemoryCommandBus};
use content_domain::{BusinessContext, InMemoryCursoRepository};
use rust_decimal::Decimal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.log_filter)?)
        .init();

    tracing::info!(?config, "catalog demo starting");

    let repo = Arc::new(InMemoryCursoRepository::starting_at(config.first_course_id));
    let bus = InMemoryCommandBus::new();
    bus.register::<CriarCursoCommand, _>(Arc::new(CriarCursoCommandHandler::new(repo.clone())))?;

    // Ctrl-C 取消仍在进行中的命令
    let token = CancellationToken::new();
    let on_signal = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_signal.cancel();
        }
    });

    let ctx = AppContext {
        biz: BusinessContext::builder()
            .correlation_id(Uuid::new_v4().to_string())
            .actor_type("system".into())
            .actor_id("demo".into())
            .build(),
        cancellation: token,
    };

    let cmd = CriarCursoCommand::builder()
        .nome("Intro to Testing")
        .descricao_conteudo("Covers unit and integration testing")
        .objetivos(vec![
            "Learn TDD".into(),
            "Write integration tests".into(),
        ])
        .pre_requisitos(vec!["Basic Rust".into()])
        .preco(Decimal::new(19990, 2))
        .duracao(24)
        .nivel("Iniciante")
        .build();

    let dto = bus.dispatch(&ctx, cmd.clone()).await?;
    println!("{}", serde_json::to_string_pretty(&dto)?);

    // 同样的输入再次提交会得到一门新课程
    let again = bus.dispatch(&ctx, cmd).await?;
    tracing::info!(first = dto.id, second = again.id, stored = repo.len(), "created twice");

    let invalid = CriarCursoCommand::builder()
        .nome("Sem preço")
        .descricao_conteudo("Curso sem preço definido")
        .objetivos(vec!["Demonstrar a validação".into()])
        .preco(Decimal::ZERO)
        .duracao(1)
        .nivel("Iniciante")
        .build();

    match bus.dispatch(&ctx, invalid).await {
        Err(AppError::Validation { field, message }) => {
            tracing::info!(field, %message, "invalid command rejected as expected");
        }
        Err(other) => return Err(other.into()),
        Ok(dto) => anyhow::bail!("invalid command was accepted: id={}", dto.id),
    }

    Ok(())
}
