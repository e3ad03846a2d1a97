use chrono::{DateTime, Utc};
use content_domain::{Curso, Entity, StatusCurso};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// 课时投影
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AulaDto {
    pub id: u64,
    pub titulo: String,
    pub duracao: i32,
}

/// 课程投影：面向外部的扁平结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CursoDto {
    pub id: u64,
    pub titulo: String,
    pub descricao: String,
    pub preco: Decimal,
    pub duracao: i32,
    pub nivel: String,
    pub status: StatusCurso,
    pub data_criacao: DateTime<Utc>,
    pub data_atualizacao: Option<DateTime<Utc>>,
    pub aulas: Vec<AulaDto>,
}

/// 仅接受已持久化的课程；没有标识说明仓储实现有误
impl TryFrom<&Curso> for CursoDto {
    type Error = AppError;

    fn try_from(curso: &Curso) -> Result<Self, Self::Error> {
        let id = curso
            .id()
            .ok_or_else(|| AppError::Infra("repository returned a course without id".into()))?;

        Ok(Self {
            id: id.value(),
            titulo: curso.nome().to_string(),
            descricao: curso.conteudo_programatico().descricao().to_string(),
            preco: curso.preco(),
            duracao: curso.duracao(),
            nivel: curso.nivel().to_string(),
            status: curso.status(),
            data_criacao: curso.data_criacao(),
            data_atualizacao: curso.data_atualizacao(),
            aulas: Vec::new(),
        })
    }
}
