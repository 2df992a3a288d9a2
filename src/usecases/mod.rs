//! 业务能力接口
//!
//! 控制器只依赖 [`CreateStudent`] 这一抽象能力，具体实现通过
//! [`register`] 按名称注册，由配置选择。

pub mod memory;
pub mod register;

use crate::errors::Result;
use crate::models::students::entities::{StudentRecord, ValidatedStudentInput};

pub use memory::InMemoryStudentRegistry;

/// 创建学生能力
///
/// - `Ok(Some(record))`：创建成功，`id` 由实现方分配
/// - `Ok(None)`：正常完成但无法创建（例如邮箱已被注册）
/// - `Err(_)`：执行过程中发生故障
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CreateStudent: Send + Sync {
    async fn execute(&self, input: ValidatedStudentInput) -> Result<Option<StudentRecord>>;
}
