//! 实体：课程（Curso）
//!
use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::conteudo_programatico::ConteudoProgramatico;
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};

/// 课程标识，由仓储在持久化时分配
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CursoId(u64);

impl CursoId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CursoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CursoId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u64> for CursoId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// 课程状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCurso {
    Ativo,
    Inativo,
}

/// 课程实体
///
/// 新建的课程处于 `Ativo` 状态且没有标识；标识只能通过
/// [`Curso::with_id`] 由仓储赋予。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curso {
    id: Option<CursoId>,
    nome: String,
    conteudo_programatico: ConteudoProgramatico,
    preco: Decimal,
    duracao: i32,
    nivel: String,
    status: StatusCurso,
    data_criacao: DateTime<Utc>,
    data_atualizacao: Option<DateTime<Utc>>,
}

impl Curso {
    /// 创建一个尚未持久化的课程
    ///
    /// 校验：名称与级别非空白，价格与时长大于零。
    pub fn new(
        nome: impl Into<String>,
        conteudo_programatico: ConteudoProgramatico,
        preco: Decimal,
        duracao: i32,
        nivel: impl Into<String>,
    ) -> DomainResult<Self> {
        let nome = nome.into();
        let nivel = nivel.into();

        if nome.trim().is_empty() {
            return Err(DomainError::invalid_value("curso: nome vazio"));
        }
        if preco <= Decimal::ZERO {
            return Err(DomainError::invalid_value(format!(
                "curso: preço deve ser positivo, recebido {preco}"
            )));
        }
        if duracao <= 0 {
            return Err(DomainError::invalid_value(format!(
                "curso: duração deve ser positiva, recebido {duracao}"
            )));
        }
        if nivel.trim().is_empty() {
            return Err(DomainError::invalid_value("curso: nível vazio"));
        }

        Ok(Self {
            id: None,
            nome,
            conteudo_programatico,
            preco,
            duracao,
            nivel,
            status: StatusCurso::Ativo,
            data_criacao: Utc::now(),
            data_atualizacao: None,
        })
    }

    /// 由仓储赋予标识；已有标识的实体不可重新赋值
    pub fn with_id(mut self, id: CursoId) -> DomainResult<Self> {
        if let Some(existing) = self.id {
            return Err(DomainError::InvalidState {
                reason: format!("curso já possui id {existing}"),
            });
        }
        self.id = Some(id);
        Ok(self)
    }

    pub fn nome(&self) -> &str {
        &self.nome
    }

    pub fn conteudo_programatico(&self) -> &ConteudoProgramatico {
        &self.conteudo_programatico
    }

    pub fn preco(&self) -> Decimal {
        self.preco
    }

    pub fn duracao(&self) -> i32 {
        self.duracao
    }

    pub fn nivel(&self) -> &str {
        &self.nivel
    }

    pub fn status(&self) -> StatusCurso {
        self.status
    }

    pub fn data_criacao(&self) -> DateTime<Utc> {
        self.data_criacao
    }

    pub fn data_atualizacao(&self) -> Option<DateTime<Utc>> {
        self.data_atualizacao
    }
}

impl Entity for Curso {
    type Id = CursoId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conteudo() -> ConteudoProgramatico {
        ConteudoProgramatico::new("Testes", vec!["Aprender TDD".into()], vec![]).unwrap()
    }

    #[test]
    fn new_course_is_active_and_transient() {
        let curso = Curso::new("Intro", conteudo(), Decimal::new(9990, 2), 40, "Iniciante").unwrap();

        assert!(curso.is_transient());
        assert_eq!(curso.status(), StatusCurso::Ativo);
        assert_eq!(curso.preco(), Decimal::new(9990, 2));
        assert_eq!(curso.duracao(), 40);
        assert_eq!(curso.nivel(), "Iniciante");
        assert!(curso.data_atualizacao().is_none());
        assert!(curso.data_criacao() <= Utc::now());
    }

    #[test]
    fn rejects_invalid_fields() {
        assert!(Curso::new(" ", conteudo(), Decimal::ONE, 1, "x").is_err());
        assert!(Curso::new("a", conteudo(), Decimal::ZERO, 1, "x").is_err());
        assert!(Curso::new("a", conteudo(), Decimal::NEGATIVE_ONE, 1, "x").is_err());
        assert!(Curso::new("a", conteudo(), Decimal::ONE, 0, "x").is_err());
        assert!(Curso::new("a", conteudo(), Decimal::ONE, 1, "").is_err());
    }

    #[test]
    fn id_is_assigned_only_once() {
        let curso = Curso::new("Intro", conteudo(), Decimal::ONE, 1, "x").unwrap();
        let curso = curso.with_id(CursoId::new(7)).unwrap();
        assert_eq!(curso.id(), Some(&CursoId::new(7)));
        assert!(!curso.is_transient());

        let err = curso.with_id(CursoId::new(8)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidState { .. }));
    }

    #[test]
    fn curso_id_parse_and_display() {
        let id: CursoId = " 42 ".parse().unwrap();
        assert_eq!(id, CursoId::from(42));
        assert_eq!(id.to_string(), "42");
        assert!(matches!("abc".parse::<CursoId>(), Err(DomainError::InvalidId(_))));
    }
}
