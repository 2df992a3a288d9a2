use serde_json::Value;

// 学生创建请求（未经校验，字段均可能缺失）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateStudentRequest {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub gender: Option<Value>,
    pub age: Option<Value>,
}

impl CreateStudentRequest {
    pub const NAME: &'static str = "name";
    pub const EMAIL: &'static str = "email";
    pub const GENDER: &'static str = "gender";
    pub const AGE: &'static str = "age";

    /// 必填字段，按校验顺序排列
    pub const REQUIRED_FIELDS: [&'static str; 4] =
        [Self::NAME, Self::EMAIL, Self::GENDER, Self::AGE];

    /// 从请求体中提取字段；非对象请求体视为没有任何字段，未知字段被忽略
    pub fn from_body(body: Option<&Value>) -> Self {
        match body.and_then(Value::as_object) {
            Some(map) => Self {
                name: map.get(Self::NAME).cloned(),
                email: map.get(Self::EMAIL).cloned(),
                gender: map.get(Self::GENDER).cloned(),
                age: map.get(Self::AGE).cloned(),
            },
            None => Self::default(),
        }
    }

    pub fn field(&self, field: &str) -> Option<&Value> {
        match field {
            Self::NAME => self.name.as_ref(),
            Self::EMAIL => self.email.as_ref(),
            Self::GENDER => self.gender.as_ref(),
            Self::AGE => self.age.as_ref(),
            _ => None,
        }
    }
}
