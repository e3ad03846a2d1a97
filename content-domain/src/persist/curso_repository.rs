use crate::curso::Curso;
use crate::error::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

/// 课程仓储
///
/// 只暴露创建用例所需的最小能力：接收一个尚未持久化的课程，
/// 返回带有仓储分配标识的课程。
#[async_trait]
pub trait CursoRepository: Send + Sync {
    async fn add(&self, curso: Curso) -> DomainResult<Curso>;
}

#[async_trait]
impl<T> CursoRepository for Arc<T>
where
    T: CursoRepository + ?Sized,
{
    async fn add(&self, curso: Curso) -> DomainResult<Curso> {
        (**self).add(curso).await
    }
}
