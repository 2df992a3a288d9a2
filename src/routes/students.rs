use actix_web::{HttpResponse, Result as ActixResult, web};
use serde_json::Value;

use crate::controllers::{Controller, CreateStudentController};
use crate::models::ControllerRequest;

// HTTP处理程序
pub async fn create_student(
    controller: web::Data<CreateStudentController>,
    body: web::Json<Value>,
) -> ActixResult<HttpResponse> {
    let response = controller
        .handle(ControllerRequest::with_body(body.into_inner()))
        .await;
    Ok(response.into_http_response())
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/students").route("", web::post().to(create_student)));
}
