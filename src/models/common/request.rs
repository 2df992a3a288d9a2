use serde_json::Value;

// 与传输层无关的控制器请求
#[derive(Debug, Clone, Default)]
pub struct ControllerRequest {
    pub body: Option<Value>,
}

impl ControllerRequest {
    pub fn with_body(body: Value) -> Self {
        Self { body: Some(body) }
    }
}
