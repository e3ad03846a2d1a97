use crate::curso::{Curso, CursoId};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::persist::CursoRepository;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// 基于内存的 CursoRepository 实现
/// - 标识从 `first_id` 开始单调递增，每次 `add` 分配一个新标识
/// - 已持久化（带标识）的课程不能再次 `add`
/// - 标识空间耗尽（到达 `u64::MAX`）后 `add` 返回错误，不会回绕
pub struct InMemoryCursoRepository {
    next_id: AtomicU64,
    cursos: DashMap<CursoId, Curso>,
}

impl Default for InMemoryCursoRepository {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl InMemoryCursoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定第一个分配的标识
    pub fn starting_at(first_id: u64) -> Self {
        Self {
            next_id: AtomicU64::new(first_id),
            cursos: DashMap::new(),
        }
    }

    pub fn get(&self, id: &CursoId) -> Option<Curso> {
        self.cursos.get(id).map(|c| c.clone())
    }

    pub fn len(&self) -> usize {
        self.cursos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursos.is_empty()
    }
}

#[async_trait]
impl CursoRepository for InMemoryCursoRepository {
    async fn add(&self, curso: Curso) -> DomainResult<Curso> {
        if let Some(id) = curso.id() {
            return Err(DomainError::Repository {
                reason: format!("curso {id} já foi persistido"),
            });
        }

        let next = self
            .next_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
            .map_err(|last| DomainError::Repository {
                reason: format!("identificadores esgotados após {last}"),
            })?;
        let id = CursoId::new(next);
        let curso = curso.with_id(id)?;
        self.cursos.insert(id, curso.clone());

        tracing::debug!(curso_id = %id, nome = curso.nome(), "curso stored in memory");

        Ok(curso)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conteudo_programatico::ConteudoProgramatico;
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn curso(nome: &str) -> Curso {
        let conteudo =
            ConteudoProgramatico::new("Testes", vec!["Aprender TDD".into()], vec![]).unwrap();
        Curso::new(nome, conteudo, Decimal::ONE, 10, "Iniciante").unwrap()
    }

    #[tokio::test]
    async fn assigns_sequential_ids() {
        let repo = InMemoryCursoRepository::starting_at(100);

        let a = repo.add(curso("A")).await.unwrap();
        let b = repo.add(curso("B")).await.unwrap();

        assert_eq!(a.id(), Some(&CursoId::new(100)));
        assert_eq!(b.id(), Some(&CursoId::new(101)));
        assert_eq!(repo.len(), 2);
        assert_eq!(repo.get(&CursoId::new(101)).unwrap().nome(), "B");
    }

    #[tokio::test]
    async fn rejects_already_persisted_course() {
        let repo = InMemoryCursoRepository::new();
        let persisted = repo.add(curso("A")).await.unwrap();

        let err = repo.add(persisted).await.unwrap_err();
        assert!(matches!(err, DomainError::Repository { .. }));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn exhausted_id_space_does_not_wrap() {
        let repo = InMemoryCursoRepository::starting_at(u64::MAX - 1);

        let last = repo.add(curso("A")).await.unwrap();
        assert_eq!(last.id(), Some(&CursoId::new(u64::MAX - 1)));

        let err = repo.add(curso("B")).await.unwrap_err();
        assert!(matches!(err, DomainError::Repository { .. }));
        assert_eq!(repo.len(), 1);
        assert!(repo.get(&CursoId::new(0)).is_none());
    }

    #[tokio::test]
    async fn works_through_arc_dyn() {
        let repo: Arc<dyn CursoRepository> = Arc::new(InMemoryCursoRepository::new());
        let saved = repo.add(curso("A")).await.unwrap();
        assert_eq!(saved.id(), Some(&CursoId::new(1)));
    }
}
