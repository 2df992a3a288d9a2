use crate::config::AppConfig;
use crate::controllers::CreateStudentController;
use crate::errors::{Result, StudentError};
use crate::usecases::{
    CreateStudent, InMemoryStudentRegistry,
    register::{
        debug_create_student_registry, get_create_student_plugin, register_builtin_plugins,
    },
};
use std::any::Any;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct StartupContext {
    pub create_student: Arc<dyn CreateStudent>,
}

impl StartupContext {
    /// 为每个工作线程构建控制器
    pub fn controller(&self) -> CreateStudentController {
        CreateStudentController::new(self.create_student.clone())
    }
}

/// 按名称创建 CreateStudent 后端
async fn create_backend(backend: &str) -> Result<Arc<dyn CreateStudent>> {
    info!("Attempting to create {} create-student backend", backend);

    if let Some(constructor) = get_create_student_plugin(backend) {
        match constructor().await {
            Ok(create_student) => {
                info!("Successfully created {} create-student backend", backend);
                return Ok(create_student);
            }
            Err(e) => {
                warn!("Failed to create {} backend: {}", backend, e);
            }
        }
    } else {
        warn!("Create-student backend '{}' not found in registry", backend);
    }

    // 配置的后端不可用时回退到内存后端
    if backend != InMemoryStudentRegistry::PLUGIN_NAME {
        warn!("Falling back to in-memory create-student backend");
        if let Some(fallback_constructor) =
            get_create_student_plugin(InMemoryStudentRegistry::PLUGIN_NAME)
        {
            match fallback_constructor().await {
                Ok(create_student) => {
                    info!("Successfully created fallback in-memory backend");
                    return Ok(create_student);
                }
                Err(fallback_e) => {
                    warn!("Failed to create fallback in-memory backend: {}", fallback_e);
                }
            }
        }
    }

    Err(StudentError::capability_not_found(format!(
        "No create-student backend available (tried: {backend})"
    )))
}

/// 提取 panic 负载中的消息
pub(crate) fn panic_payload_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic payload"
    }
}

/// 启动完成后替换 human-panic 的钩子
///
/// 运行期的 panic 由控制器捕获并返回 500，这里只写日志，不生成崩溃报告。
pub fn install_runtime_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        error!(
            "Panic at {}: {}",
            location,
            panic_payload_message(info.payload())
        );
    }));
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup() -> Result<StartupContext> {
    register_builtin_plugins();

    if cfg!(debug_assertions) {
        debug_create_student_registry();
        debug!("Debug mode: create-student registry is enabled");
    }

    let config = AppConfig::get();
    let create_student = create_backend(&config.registry.backend).await?;
    info!("Create-student backend initialized");

    Ok(StartupContext { create_student })
}
