//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称以及对外的状态码映射。

use std::fmt;

/// 注册失败时对外返回的固定消息
pub const REGISTRATION_DECLINED_MESSAGE: &str = "error when trying to register user";

/// 内部故障时对外返回的固定消息（不暴露内部细节）
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_student_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum StudentError {
            $($variant(String),)*
        }

        impl StudentError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(StudentError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(StudentError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(StudentError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl StudentError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        StudentError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_student_errors! {
    Validation("E001", "Validation Error"),
    RegistrationDeclined("E002", "Registration Declined"),
    CapabilityFault("E003", "Capability Fault"),
    CapabilityNotFound("E004", "Capability Backend Not Found"),
    Configuration("E005", "Configuration Error"),
}

impl StudentError {
    /// 对外响应使用的 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            StudentError::Validation(_) => 400,
            _ => 500,
        }
    }

    /// 对外响应使用的消息
    ///
    /// 只有校验错误会原样返回详情，其余错误使用固定消息。
    pub fn public_message(&self) -> &str {
        match self {
            StudentError::Validation(msg) => msg,
            StudentError::RegistrationDeclined(_) => REGISTRATION_DECLINED_MESSAGE,
            _ => INTERNAL_ERROR_MESSAGE,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for StudentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for StudentError {}

pub type Result<T> = std::result::Result<T, StudentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(StudentError::validation("test").code(), "E001");
        assert_eq!(StudentError::registration_declined("test").code(), "E002");
        assert_eq!(StudentError::capability_fault("test").code(), "E003");
        assert_eq!(StudentError::configuration("test").code(), "E005");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            StudentError::capability_not_found("test").error_type(),
            "Capability Backend Not Found"
        );
        assert_eq!(
            StudentError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            StudentError::validation("no name was provided").status_code(),
            400
        );
        assert_eq!(StudentError::registration_declined("x").status_code(), 500);
        assert_eq!(StudentError::capability_fault("x").status_code(), 500);
    }

    #[test]
    fn test_public_message_hides_fault_detail() {
        let err = StudentError::capability_fault("connection refused by 10.0.0.3");
        assert_eq!(err.public_message(), INTERNAL_ERROR_MESSAGE);
        assert!(!err.public_message().contains("10.0.0.3"));

        let err = StudentError::registration_declined("duplicate email");
        assert_eq!(err.public_message(), REGISTRATION_DECLINED_MESSAGE);

        let err = StudentError::validation("no age was provided");
        assert_eq!(err.public_message(), "no age was provided");
    }

    #[test]
    fn test_format_simple() {
        let err = StudentError::validation("invalid gender option provided");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("invalid gender option provided"));
    }
}
