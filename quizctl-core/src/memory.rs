//! In-process question repository
//!
//! Same observable behavior as the SQL engine: store-assigned ids, options
//! renumbered by position, full replacement on update, seek pagination.
//! Used to exercise the service and HTTP layers without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::models::{Page, Question};
use crate::repo::QuestionRepository;
use crate::{Error, Result};

#[derive(Default)]
struct State {
    last_question_id: i64,
    last_option_id: i64,
    questions: BTreeMap<i64, Question>,
}

impl State {
    /// Store `question` under `id`, assigning fresh option ids.
    fn put(&mut self, id: i64, question: &Question) {
        let mut stored = question.clone().with_id(id);
        for option in &mut stored.options {
            self.last_option_id += 1;
            option.id = self.last_option_id;
        }
        self.questions.insert(id, stored);
    }
}

#[derive(Default)]
pub struct MemoryRepository {
    state: Mutex<State>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored questions.
    pub async fn len(&self) -> usize {
        self.state.lock().await.questions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl QuestionRepository for MemoryRepository {
    async fn create(&self, question: &Question) -> Result<i64> {
        let mut state = self.state.lock().await;
        state.last_question_id += 1;
        let id = state.last_question_id;
        state.put(id, question);
        tracing::debug!(question_id = id, "question stored in memory");
        Ok(id)
    }

    async fn update(&self, question: &Question) -> Result<()> {
        let mut state = self.state.lock().await;
        if !state.questions.contains_key(&question.id) {
            return Err(Error::NotFound { id: question.id });
        }
        state.put(question.id, question);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.state.lock().await.questions.remove(&id);
        Ok(())
    }

    async fn list_all(&self, page: Page) -> Result<Vec<Question>> {
        let state = self.state.lock().await;
        let matching = state.questions.values().filter(|q| page.admits(q.id));

        let questions = if page.is_seek() {
            matching.rev().take(page.size as usize).cloned().collect()
        } else {
            matching.cloned().collect()
        };
        Ok(questions)
    }
}
