/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，通常会修改领域状态。
/// - 执行结果通过关联类型 `Output` 返回（例如新建资源的 DTO）；
/// - 建议保持语义化的“动宾结构”命名，如 `CriarCurso`。
///
/// 关联常量：
/// - `NAME`：命令的稳定名称，用于日志、追踪与路由。避免依赖 `type_name::<T>()`。
pub trait Command: Send + Sync + 'static {
    /// 命令的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 处理器成功时返回的结果类型
    type Output: Send + 'static;
}
