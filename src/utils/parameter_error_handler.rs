use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use tracing::debug;

/// 无法解析的请求体统一返回的消息
pub const INVALID_BODY_MESSAGE: &str = "invalid request body";

/// JSON 请求体解析错误处理器
///
/// 在控制器之前拦截，返回 400 与固定消息，不回显解析细节。
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected JSON payload for {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(INVALID_BODY_MESSAGE);
    actix_web::error::InternalError::from_response(err, response).into()
}

/// JSON 提取器配置：请求体大小上限 + 统一错误处理
pub fn json_config(max_payload_size: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(max_payload_size)
        .error_handler(json_error_handler)
}
