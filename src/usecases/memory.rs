//! 进程内学生注册后端
//!
//! 记录只保存在当前进程内存中，进程退出即丢失。

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::students::entities::{StudentRecord, ValidatedStudentInput};
use crate::usecases::CreateStudent;

pub struct InMemoryStudentRegistry {
    by_email: DashMap<String, StudentRecord>,
    next_id: AtomicI64,
}

impl Default for InMemoryStudentRegistry {
    fn default() -> Self {
        Self::new(1)
    }
}

impl InMemoryStudentRegistry {
    pub const PLUGIN_NAME: &'static str = "memory";

    pub fn new(first_id: i64) -> Self {
        Self {
            by_email: DashMap::new(),
            next_id: AtomicI64::new(first_id),
        }
    }

    pub fn from_config() -> Self {
        let config = AppConfig::get();
        debug!(
            "InMemoryStudentRegistry initialized with first id: {}",
            config.registry.first_id
        );
        Self::new(config.registry.first_id)
    }

    pub fn len(&self) -> usize {
        self.by_email.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_email.is_empty()
    }

    /// 通过邮箱查找已注册的学生
    pub fn get(&self, email: &str) -> Option<StudentRecord> {
        self.by_email.get(email).map(|r| r.value().clone())
    }
}

#[async_trait]
impl CreateStudent for InMemoryStudentRegistry {
    async fn execute(&self, input: ValidatedStudentInput) -> Result<Option<StudentRecord>> {
        match self.by_email.entry(input.email().to_string()) {
            Entry::Occupied(_) => {
                debug!("Email already registered: {}", input.email());
                Ok(None)
            }
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let record = input.into_record(id);
                slot.insert(record.clone());
                debug!("Registered student with id: {}", id);
                Ok(Some(record))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::students::entities::Gender;
    use serde_json::Number;

    fn input(email: &str) -> ValidatedStudentInput {
        ValidatedStudentInput::new(
            "valid_name".to_string(),
            email.to_string(),
            Gender::Female,
            Number::from(25u32),
        )
    }

    #[actix_web::test]
    async fn test_assigns_increasing_ids() {
        let registry = InMemoryStudentRegistry::new(0);
        let first = registry.execute(input("a@example.com")).await.unwrap().unwrap();
        let second = registry.execute(input("b@example.com")).await.unwrap().unwrap();

        assert_eq!(first.id, 0);
        assert_eq!(second.id, 1);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("b@example.com"), Some(second));
    }

    #[actix_web::test]
    async fn test_declines_duplicate_email() {
        let registry = InMemoryStudentRegistry::default();
        assert!(registry.is_empty());

        let created = registry.execute(input("dup@example.com")).await.unwrap();
        assert!(created.is_some());

        let declined = registry.execute(input("dup@example.com")).await.unwrap();
        assert!(declined.is_none());
        assert_eq!(registry.len(), 1);
    }

    #[actix_web::test]
    async fn test_declined_registration_does_not_consume_id() {
        let registry = InMemoryStudentRegistry::new(10);
        registry.execute(input("x@example.com")).await.unwrap();
        registry.execute(input("x@example.com")).await.unwrap();
        let next = registry.execute(input("y@example.com")).await.unwrap().unwrap();
        assert_eq!(next.id, 11);
    }
}
