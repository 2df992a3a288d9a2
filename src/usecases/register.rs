use crate::errors::{Result, StudentError};
use crate::usecases::{CreateStudent, memory::InMemoryStudentRegistry};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedCreateStudentFuture =
    Pin<Box<dyn Future<Output = Result<Arc<dyn CreateStudent>>> + Send>>;
pub type CreateStudentConstructor = Arc<dyn Fn() -> BoxedCreateStudentFuture + Send + Sync>;

static CREATE_STUDENT_REGISTRY: Lazy<RwLock<HashMap<String, CreateStudentConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_create_student_plugin<S: Into<String>>(
    name: S,
    constructor: CreateStudentConstructor,
) {
    let name = name.into();
    let mut registry = CREATE_STUDENT_REGISTRY
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.insert(name, constructor);
}

pub fn get_create_student_plugin(name: &str) -> Option<CreateStudentConstructor> {
    CREATE_STUDENT_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .get(name)
        .cloned()
}

/// 注册内置后端，可重复调用
pub fn register_builtin_plugins() {
    register_create_student_plugin(
        InMemoryStudentRegistry::PLUGIN_NAME,
        Arc::new(|| -> BoxedCreateStudentFuture {
            Box::pin(async {
                let registry: Arc<dyn CreateStudent> =
                    Arc::new(InMemoryStudentRegistry::from_config());
                Ok::<_, StudentError>(registry)
            })
        }),
    );
}

pub fn debug_create_student_registry() {
    let registry = CREATE_STUDENT_REGISTRY
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    if registry.is_empty() {
        tracing::debug!("No create-student backends registered.");
    } else {
        tracing::debug!("Registered create-student backends:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}
