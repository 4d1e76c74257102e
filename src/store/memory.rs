//! In-memory store implementation.
//!
//! Holds both tables behind a single `RwLock` so concurrent requests see
//! read-committed state. Question ids come from a monotonic counter and
//! are never reused after deletion.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::record::{Category, NewQuestion, Question};
use super::seed::SeedData;
use super::TriviaStore;

#[derive(Debug, Default)]
struct Tables {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_question_id: u64,
}

/// In-memory trivia store
#[derive(Debug)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Tables {
                next_question_id: 1,
                ..Tables::default()
            }),
        }
    }

    /// Create a store pre-populated from seed data.
    pub fn from_seed(seed: SeedData) -> Self {
        let next_question_id = seed
            .questions
            .iter()
            .map(|q| q.id + 1)
            .max()
            .unwrap_or(1);
        Self {
            inner: RwLock::new(Tables {
                categories: seed.categories,
                questions: seed.questions,
                next_question_id,
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl TriviaStore for MemoryStore {
    fn categories(&self) -> StoreResult<Vec<Category>> {
        let tables = self.read()?;
        let mut categories = tables.categories.clone();
        categories.sort_by_key(|c| c.id);
        Ok(categories)
    }

    fn category(&self, id: u64) -> StoreResult<Option<Category>> {
        let tables = self.read()?;
        Ok(tables.categories.iter().find(|c| c.id == id).cloned())
    }

    fn questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions.clone())
    }

    fn questions_in_category(&self, category_id: u64) -> StoreResult<Vec<Question>> {
        let tables = self.read()?;
        Ok(tables
            .questions
            .iter()
            .filter(|q| q.in_category(category_id))
            .cloned()
            .collect())
    }

    fn insert_question(&self, new: NewQuestion) -> StoreResult<Question> {
        let mut tables = self.write()?;
        let id = tables.next_question_id;
        tables.next_question_id += 1;
        let question = new.into_question(id);
        tables.questions.push(question.clone());
        Ok(question)
    }

    fn delete_question(&self, id: u64) -> StoreResult<bool> {
        let mut tables = self.write()?;
        let before = tables.questions.len();
        tables.questions.retain(|q| q.id != id);
        Ok(tables.questions.len() < before)
    }

    fn question_count(&self) -> StoreResult<usize> {
        Ok(self.read()?.questions.len())
    }
}
