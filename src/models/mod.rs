pub mod common;
pub mod students;

pub use common::request::ControllerRequest;
pub use common::response::{ControllerResponse, ResponseBody};

// 应用启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
