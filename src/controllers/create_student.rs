use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::Controller;
use crate::errors::StudentError;
use crate::models::{
    ControllerRequest, ControllerResponse, students::requests::CreateStudentRequest,
};
use crate::usecases::CreateStudent;
use crate::utils::validate::validate_create_student;

/// 创建学生控制器
///
/// 校验请求体，调用 [`CreateStudent`] 能力一次，并把结果映射为响应：
/// - 校验失败：400 + 校验消息
/// - 创建成功：201 + 学生记录
/// - 能力返回空：500 + 注册失败消息
/// - 能力出错或 panic：500 + 内部错误消息（细节只写日志）
pub struct CreateStudentController {
    create_student: Arc<dyn CreateStudent>,
}

impl CreateStudentController {
    pub fn new(create_student: Arc<dyn CreateStudent>) -> Self {
        Self { create_student }
    }
}

#[async_trait::async_trait]
impl Controller for CreateStudentController {
    async fn handle(&self, request: ControllerRequest) -> ControllerResponse {
        let student_request = CreateStudentRequest::from_body(request.body.as_ref());

        let input = match validate_create_student(&student_request) {
            Ok(input) => input,
            Err(e) => {
                debug!("Create student request rejected: {}", e.message());
                return ControllerResponse::from_error(&e);
            }
        };

        // 唯一的挂起点；在 async 块内调用，确保同步 panic 也能被捕获
        let outcome = AssertUnwindSafe(async { self.create_student.execute(input).await })
            .catch_unwind()
            .await;

        match outcome {
            Ok(Ok(Some(student))) => {
                info!("Student created with id: {}", student.id);
                ControllerResponse::created(student)
            }
            Ok(Ok(None)) => {
                warn!("CreateStudent completed without a record");
                ControllerResponse::from_error(&StudentError::registration_declined(
                    "capability returned no record",
                ))
            }
            Ok(Err(e)) => {
                error!("CreateStudent failed: {}", e);
                ControllerResponse::from_error(&StudentError::capability_fault(e.to_string()))
            }
            Err(_) => {
                error!("CreateStudent panicked");
                ControllerResponse::from_error(&StudentError::capability_fault(
                    "capability panicked",
                ))
            }
        }
    }
}
