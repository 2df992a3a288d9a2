pub mod create_student;

pub use create_student::CreateStudentController;

use crate::models::{ControllerRequest, ControllerResponse};

/// 控制器协议：接收请求，总是返回一个结构化响应
#[async_trait::async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: ControllerRequest) -> ControllerResponse;
}
