use serde::{Deserialize, Serialize};
use serde_json::Number;

// 学生性别
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const MALE: &'static str = "male";
    pub const FEMALE: &'static str = "female";
    pub const OTHER: &'static str = "other";

    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Other]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => Gender::MALE,
            Gender::Female => Gender::FEMALE,
            Gender::Other => Gender::OTHER,
        }
    }
}

impl<'de> Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    // 区分大小写的精确匹配
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Gender::MALE => Ok(Gender::Male),
            Gender::FEMALE => Ok(Gender::Female),
            Gender::OTHER => Ok(Gender::Other),
            _ => Err(format!(
                "Invalid gender: '{s}'. Supported: male, female, other"
            )),
        }
    }
}

/// 通过校验的创建学生输入
///
/// 只能由请求校验构造，构造后不可修改。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedStudentInput {
    name: String,
    email: String,
    gender: Gender,
    age: Number,
}

impl ValidatedStudentInput {
    pub(crate) fn new(name: String, email: String, gender: Gender, age: Number) -> Self {
        Self {
            name,
            email,
            gender,
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn age(&self) -> &Number {
        &self.age
    }

    /// 由能力实现方分配 ID 后生成学生记录
    pub fn into_record(self, id: i64) -> StudentRecord {
        StudentRecord {
            id,
            name: self.name,
            email: self.email,
            gender: self.gender,
            age: self.age,
        }
    }
}

// 学生实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub gender: Gender,
    pub age: Number,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gender_parse_is_case_sensitive() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("other".parse::<Gender>(), Ok(Gender::Other));
        assert!("Male".parse::<Gender>().is_err());
        assert!(" male".parse::<Gender>().is_err());
        assert!("invalid_gender_option".parse::<Gender>().is_err());
    }

    #[test]
    fn test_gender_round_trips_through_display() {
        for gender in Gender::all() {
            assert_eq!(gender.to_string().parse::<Gender>(), Ok(*gender));
        }
    }

    #[test]
    fn test_validated_input_serializes_without_id() {
        let input = ValidatedStudentInput::new(
            "valid_name".to_string(),
            "valid_email".to_string(),
            Gender::Male,
            Number::from(25u32),
        );
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "name": "valid_name",
                "email": "valid_email",
                "gender": "male",
                "age": 25
            })
        );
    }

    #[test]
    fn test_into_record_keeps_fields() {
        let input = ValidatedStudentInput::new(
            "valid_name".to_string(),
            "valid_email".to_string(),
            Gender::Other,
            Number::from(25u32),
        );
        let record = input.into_record(7);
        assert_eq!(record.id, 7);
        assert_eq!(record.name, "valid_name");
        assert_eq!(record.gender, Gender::Other);
        assert_eq!(record.age, Number::from(25u32));
    }
}
