//! Question service: validate first, then persist

use std::sync::Arc;

use crate::models::{Page, Question};
use crate::repo::QuestionRepository;
use crate::Result;

/// Entry point used by transports.
///
/// Writes are validated before the repository sees them; errors from either
/// step are returned unchanged.
#[derive(Clone)]
pub struct QuestionService {
    repo: Arc<dyn QuestionRepository>,
}

impl QuestionService {
    pub fn new(repo: Arc<dyn QuestionRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, question: &Question) -> Result<i64> {
        question.validate()?;
        self.repo.create(question).await
    }

    pub async fn update(&self, question: &Question) -> Result<()> {
        question.validate()?;
        self.repo.update(question).await
    }

    pub async fn remove(&self, id: i64) -> Result<()> {
        self.repo.delete(id).await
    }

    pub async fn list_all(&self, last_id: i64, size: u32) -> Result<Vec<Question>> {
        self.repo.list_all(Page::new(last_id, size)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::memory::MemoryRepository;
    use crate::models::{QuestionOption, ValidationError};
    use crate::Error;

    fn sunset() -> Question {
        Question::new(
            "Where does the sun set?",
            vec![
                QuestionOption::new("East", false),
                QuestionOption::new("West", true),
            ],
        )
    }

    fn service() -> (QuestionService, Arc<MemoryRepository>) {
        let repo = Arc::new(MemoryRepository::new());
        (QuestionService::new(repo.clone()), repo)
    }

    /// Repository that counts calls and fails every one of them.
    #[derive(Default)]
    struct BrokenRepo {
        calls: AtomicUsize,
    }

    impl BrokenRepo {
        fn fail<T>(&self) -> Result<T> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(Error::persistence("start transaction", "database is locked"))
        }
    }

    #[async_trait]
    impl QuestionRepository for BrokenRepo {
        async fn create(&self, _: &Question) -> Result<i64> {
            self.fail()
        }
        async fn update(&self, _: &Question) -> Result<()> {
            self.fail()
        }
        async fn delete(&self, _: i64) -> Result<()> {
            self.fail()
        }
        async fn list_all(&self, _: Page) -> Result<Vec<Question>> {
            self.fail()
        }
    }

    #[tokio::test]
    async fn create_assigns_id() {
        let (service, _) = service();
        let id = service.create(&sunset()).await.unwrap();
        assert!(id > 0);

        let stored = service.list_all(0, 10).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        let expected = sunset().with_id(id);
        for (got, want) in stored[0].options.iter().zip(&expected.options) {
            assert!(got.id > 0);
            assert_eq!(
                (got.question_id, &got.body, got.correct, got.option_order),
                (want.question_id, &want.body, want.correct, want.option_order)
            );
        }
    }

    #[tokio::test]
    async fn invalid_question_never_reaches_repository() {
        let repo = Arc::new(BrokenRepo::default());
        let service = QuestionService::new(repo.clone());

        let err = service
            .create(&Question::new("Where does the sun set?", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::TooFewOptions { actual: 0, .. })
        ));

        let mut q = sunset().with_id(1);
        q.options.iter_mut().for_each(|o| o.correct = false);
        let err = service.update(&q).await.unwrap_err();
        assert!(matches!(err, Error::Validation(ValidationError::NoCorrectOption)));

        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn invalid_create_writes_nothing() {
        let (service, repo) = service();
        let _ = service.create(&Question::new("too short", vec![])).await;
        assert_eq!(repo.len().await, 0);
    }

    #[tokio::test]
    async fn persistence_errors_pass_through() {
        let repo = Arc::new(BrokenRepo::default());
        let service = QuestionService::new(repo.clone());

        let err = service.create(&sunset()).await.unwrap_err();
        assert_eq!(err.to_string(), "unable to start transaction: database is locked");
        assert!(service.remove(1).await.is_err());
        assert!(service.list_all(0, 10).await.is_err());
        assert_eq!(repo.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn update_replaces_everything() {
        let (service, _) = service();
        let id = service.create(&sunset()).await.unwrap();

        let replacement = Question::new(
            "Where does the sun rise?",
            vec![
                QuestionOption::new("North", false),
                QuestionOption::new("East", true),
                QuestionOption::new("South", false),
            ],
        )
        .with_id(id);
        service.update(&replacement).await.unwrap();

        let stored = service.list_all(0, 10).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].body, "Where does the sun rise?");
        let bodies: Vec<_> = stored[0].options.iter().map(|o| o.body.as_str()).collect();
        assert_eq!(bodies, ["North", "East", "South"]);
    }

    #[tokio::test]
    async fn remove_missing_id_is_ok() {
        let (service, repo) = service();
        service.create(&sunset()).await.unwrap();
        service.remove(999).await.unwrap();
        assert_eq!(repo.len().await, 1);
    }
}
