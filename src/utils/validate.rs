use serde_json::Value;

use crate::errors::{Result, StudentError};
use crate::models::students::{
    entities::{Gender, ValidatedStudentInput},
    requests::CreateStudentRequest,
};

/// 判断字段是否"有值"
///
/// 缺失、`null`、`false`、空字符串和数值 0 都视为未提供。
pub fn is_provided(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn require_string(request: &CreateStudentRequest, field: &str) -> Result<String> {
    match request.field(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(StudentError::validation(format!("invalid {field} provided"))),
    }
}

/// 校验创建学生请求
///
/// 按 name、email、gender、age 的顺序检查必填字段，遇到第一个缺失字段即返回；
/// 之后检查 gender 是否为 male / female / other 之一。
/// 通过后原样取出四个字段，不做任何转换或裁剪。
pub fn validate_create_student(request: &CreateStudentRequest) -> Result<ValidatedStudentInput> {
    for field in CreateStudentRequest::REQUIRED_FIELDS {
        if !is_provided(request.field(field)) {
            return Err(StudentError::validation(format!(
                "no {field} was provided"
            )));
        }
    }

    let gender = request
        .gender
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Gender>().ok())
        .ok_or_else(|| StudentError::validation("invalid gender option provided"))?;

    let name = require_string(request, CreateStudentRequest::NAME)?;
    let email = require_string(request, CreateStudentRequest::EMAIL)?;
    let age = match &request.age {
        Some(Value::Number(n)) => n.clone(),
        _ => return Err(StudentError::validation("invalid age provided")),
    };

    Ok(ValidatedStudentInput::new(name, email, gender, age))
}
