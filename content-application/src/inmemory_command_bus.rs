use crate::{
    command::Command, command_bus::CommandBus, command_handler::CommandHandler,
    context::AppContext, error::AppError,
};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, TypeId};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

type BoxedOutput = Box<dyn Any + Send>;

type CmdHandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<BoxedOutput, AppError>> + Send + 'a>>;

type CmdHandlerFn =
    Arc<dyn for<'a> Fn(Box<dyn Any + Send>, &'a AppContext) -> CmdHandlerFuture<'a> + Send + Sync>;

fn erase<F>(f: F) -> CmdHandlerFn
where
    F: for<'a> Fn(Box<dyn Any + Send>, &'a AppContext) -> CmdHandlerFuture<'a>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// 基于内存的 CommandBus 实现
/// - 通过 TypeId 注册不同 Command 对应的 Handler，每个命令只允许一个处理器
/// - 运行时以类型擦除（Any）方式进行调度，输出同样经类型擦除后还原为 `C::Output`
pub struct InMemoryCommandBus {
    handlers: DashMap<TypeId, CmdHandlerFn>,
}

impl Default for InMemoryCommandBus {
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }
}

impl InMemoryCommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器；重复注册同一命令返回 `AlreadyRegisteredCommand`
    pub fn register<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let f = erase(move |boxed_cmd, ctx| {
            let handler = handler.clone();

            Box::pin(async move {
                // 正常情况下这里的 downcast 永远不会失败（键与闭包同一泛型 C）
                let cmd = boxed_cmd.downcast::<C>().map_err(|_| AppError::TypeMismatch {
                    expected: C::NAME,
                    found: "unknown",
                })?;
                let out = handler.handle(ctx, *cmd).await?;
                Ok(Box::new(out) as BoxedOutput)
            })
        });

        match self.handlers.entry(TypeId::of::<C>()) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegisteredCommand { command: C::NAME }),
            Entry::Vacant(slot) => {
                slot.insert(f);
                tracing::debug!(command = C::NAME, "command handler registered");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl CommandBus for InMemoryCommandBus {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<C::Output, AppError>
    where
        C: Command,
    {
        let Some(f) = self.handlers.get(&TypeId::of::<C>()).map(|h| h.clone()) else {
            return Err(AppError::HandlerNotFound(C::NAME));
        };

        let out = (f)(Box::new(cmd), ctx).await?;

        out.downcast::<C::Output>()
            .map(|o| *o)
            .map_err(|_| AppError::TypeMismatch {
                expected: std::any::type_name::<C::Output>(),
                found: "unknown",
            })
    }
}
