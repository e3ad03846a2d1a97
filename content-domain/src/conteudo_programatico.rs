//! 值对象：课程的内容大纲（Conteúdo Programático）
//!
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// 内容大纲：描述、学习目标与先修要求
///
/// 构造后不可变；相等性按值比较。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConteudoProgramatico {
    descricao: String,
    objetivos: Vec<String>,
    pre_requisitos: Vec<String>,
}

impl ConteudoProgramatico {
    /// 创建内容大纲，并校验其不变量
    ///
    /// - 描述不能为空白；
    /// - 至少包含一个学习目标，且每个目标都不能为空白；
    /// - 先修要求可以为空，但其中的条目不能为空白。
    pub fn new(
        descricao: impl Into<String>,
        objetivos: Vec<String>,
        pre_requisitos: Vec<String>,
    ) -> DomainResult<Self> {
        let conteudo = Self {
            descricao: descricao.into(),
            objetivos,
            pre_requisitos,
        };
        conteudo.validate()?;
        Ok(conteudo)
    }

    pub fn descricao(&self) -> &str {
        &self.descricao
    }

    pub fn objetivos(&self) -> &[String] {
        &self.objetivos
    }

    pub fn pre_requisitos(&self) -> &[String] {
        &self.pre_requisitos
    }
}

impl ValueObject for ConteudoProgramatico {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.descricao.trim().is_empty() {
            return Err(DomainError::invalid_value(
                "conteúdo programático: descrição vazia",
            ));
        }
        if self.objetivos.is_empty() {
            return Err(DomainError::invalid_value(
                "conteúdo programático: nenhum objetivo",
            ));
        }
        if let Some(pos) = self.objetivos.iter().position(|o| o.trim().is_empty()) {
            return Err(DomainError::invalid_value(format!(
                "conteúdo programático: objetivo #{pos} vazio"
            )));
        }
        if let Some(pos) = self.pre_requisitos.iter().position(|p| p.trim().is_empty()) {
            return Err(DomainError::invalid_value(format!(
                "conteúdo programático: pré-requisito #{pos} vazio"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objetivos() -> Vec<String> {
        vec!["Aprender TDD".to_string(), "Escrever testes de integração".to_string()]
    }

    #[test]
    fn keeps_order_of_objectives_and_prerequisites() {
        let c = ConteudoProgramatico::new(
            "Testes de software",
            objetivos(),
            vec!["Lógica".into(), "Rust básico".into()],
        )
        .unwrap();

        assert_eq!(c.descricao(), "Testes de software");
        assert_eq!(c.objetivos()[0], "Aprender TDD");
        assert_eq!(c.pre_requisitos(), ["Lógica", "Rust básico"]);
    }

    #[test]
    fn accepts_empty_prerequisites() {
        let c = ConteudoProgramatico::new("Testes", objetivos(), vec![]).unwrap();
        assert!(c.pre_requisitos().is_empty());
    }

    #[test]
    fn rejects_blank_description() {
        let err = ConteudoProgramatico::new("  \t", objetivos(), vec![]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));
    }

    #[test]
    fn rejects_missing_or_blank_objectives() {
        let err = ConteudoProgramatico::new("Testes", vec![], vec![]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));

        let err = ConteudoProgramatico::new("Testes", vec!["ok".into(), " ".into()], vec![])
            .unwrap_err();
        match err {
            DomainError::InvalidValue { reason } => assert!(reason.contains("#1")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_blank_prerequisite() {
        let err = ConteudoProgramatico::new("Testes", objetivos(), vec!["".into()]).unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));
    }

    #[test]
    fn equality_is_by_value() {
        let a = ConteudoProgramatico::new("Testes", objetivos(), vec![]).unwrap();
        let b = ConteudoProgramatico::new("Testes", objetivos(), vec![]).unwrap();
        assert_eq!(a, b);
    }
}
