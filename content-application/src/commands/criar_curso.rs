use bon::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::command::Command;
use crate::dto::CursoDto;
use crate::error::AppError;

/// 创建课程命令
///
/// `pre_requisitos` 缺省（builder 未设置、`maybe_pre_requisitos(None)`、
/// JSON 中缺失或为 `null`）时归一为空列表，`objetivos` 同理；
/// 因此进入处理器的命令总是已归一化的。
#[derive(Builder, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriarCursoCommand {
    #[builder(into)]
    pub nome: String,
    #[builder(into)]
    pub descricao_conteudo: String,
    #[builder(default)]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub objetivos: Vec<String>,
    #[builder(default)]
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pre_requisitos: Vec<String>,
    pub preco: Decimal,
    pub duracao: i32,
    #[builder(into)]
    pub nivel: String,
}

impl Command for CriarCursoCommand {
    const NAME: &'static str = "criar_curso";
    type Output = CursoDto;
}

impl CriarCursoCommand {
    /// 校验全部输入约束，遇到第一个违规即返回
    ///
    /// 顺序：Nome → DescricaoConteudo → Objetivos → Preco → Duracao → Nivel。
    /// 处理器执行的也是这一个校验。
    pub fn validar(&self) -> Result<(), AppError> {
        if self.nome.trim().is_empty() {
            return Err(AppError::validation("Nome", "O nome do curso é obrigatório."));
        }

        if self.descricao_conteudo.trim().is_empty() {
            return Err(AppError::validation(
                "DescricaoConteudo",
                "A descrição do conteúdo programático é obrigatória.",
            ));
        }

        if self.objetivos.is_empty() {
            return Err(AppError::validation(
                "Objetivos",
                "Pelo menos um objetivo deve ser informado.",
            ));
        }
        if self.objetivos.iter().any(|o| o.trim().is_empty()) {
            return Err(AppError::validation(
                "Objetivos",
                "Os objetivos não podem ser vazios.",
            ));
        }

        if self.preco <= Decimal::ZERO {
            return Err(AppError::validation(
                "Preco",
                "O preço do curso deve ser maior que zero.",
            ));
        }

        if self.duracao <= 0 {
            return Err(AppError::validation(
                "Duracao",
                "A duração do curso deve ser maior que zero.",
            ));
        }

        if self.nivel.trim().is_empty() {
            return Err(AppError::validation("Nivel", "O nível do curso é obrigatório."));
        }

        Ok(())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
