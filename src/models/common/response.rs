use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::errors::StudentError;
use crate::models::students::entities::StudentRecord;

// 响应体：错误消息或已创建的学生记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Student(StudentRecord),
    Message(String),
}

// 统一的控制器响应结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

impl ControllerResponse {
    pub fn created(student: StudentRecord) -> Self {
        Self {
            status_code: 201,
            body: ResponseBody::Student(student),
        }
    }

    pub fn message(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: ResponseBody::Message(message.into()),
        }
    }

    /// 根据错误生成响应，只暴露对外消息
    pub fn from_error(err: &StudentError) -> Self {
        Self::message(err.status_code(), err.public_message())
    }

    /// 转换为 actix 的 HTTP 响应
    pub fn into_http_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self.body)
    }
}
