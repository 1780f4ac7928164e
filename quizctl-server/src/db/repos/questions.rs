//! Question repository
//!
//! Handles question CRUD with:
//! - Create as question insert, then option insert, with a compensating delete
//! - Update as one transaction replacing the whole option set
//! - Seek-paginated listing

use async_trait::async_trait;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use quizctl_core::{
    CompensationError, Error, Page, Question, QuestionOption, QuestionRepository, Result,
};

use super::StoreContext;

/// Question record from database
#[derive(Debug, Clone, FromRow)]
struct QuestionRow {
    id: i64,
    body: String,
}

/// Option record from database
#[derive(Debug, Clone, FromRow)]
struct OptionRow {
    id: i64,
    #[sqlx(rename = "questionId")]
    question_id: i64,
    body: String,
    correct: bool,
    #[sqlx(rename = "optionOrder")]
    option_order: i64,
}

impl From<OptionRow> for QuestionOption {
    fn from(row: OptionRow) -> Self {
        Self {
            id: row.id,
            question_id: row.question_id,
            body: row.body,
            correct: row.correct,
            option_order: row.option_order,
        }
    }
}

/// SQLite question repository
#[derive(Debug, Clone)]
pub struct SqliteQuestionRepo {
    pool: SqlitePool,
}

impl SqliteQuestionRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert the question row in its own transaction and return the new id.
    async fn insert_question(&self, body: &str) -> Result<i64> {
        let mut tx = self.pool.begin().await.during("start transaction")?;

        let id = sqlx::query("INSERT INTO questions (body) VALUES (?)")
            .bind(body)
            .execute(&mut *tx)
            .await
            .during("insert question")?
            .last_insert_rowid();

        tx.commit().await.during("commit transaction")?;
        Ok(id)
    }

    /// Insert all options of a committed question; all or none.
    async fn insert_options(&self, question_id: i64, options: &[QuestionOption]) -> Result<()> {
        let mut tx = self.pool.begin().await.during("start transaction")?;
        write_options(&mut tx, question_id, options).await?;
        tx.commit().await.during("commit transaction")?;
        Ok(())
    }

    async fn options_for(&self, question_id: i64) -> Result<Vec<QuestionOption>> {
        let rows: Vec<OptionRow> = sqlx::query_as(
            r#"
            SELECT id, questionId, body, correct, optionOrder
            FROM options
            WHERE questionId = ?
            ORDER BY optionOrder
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await
        .during("query question options")?;

        Ok(rows.into_iter().map(QuestionOption::from).collect())
    }
}

/// Insert `options` for `question_id`, numbering them by position.
async fn write_options(
    conn: &mut SqliteConnection,
    question_id: i64,
    options: &[QuestionOption],
) -> Result<()> {
    for (position, option) in options.iter().enumerate() {
        sqlx::query(
            "INSERT INTO options (questionId, body, correct, optionOrder) VALUES (?, ?, ?, ?)",
        )
        .bind(question_id)
        .bind(&option.body)
        .bind(option.correct)
        .bind(position as i64)
        .execute(&mut *conn)
        .await
        .during("insert option")?;
    }
    Ok(())
}

#[async_trait]
impl QuestionRepository for SqliteQuestionRepo {
    /// The question id only exists after its insert commits, so options go in
    /// a second transaction. If that fails the question is deleted again.
    async fn create(&self, question: &Question) -> Result<i64> {
        let id = self.insert_question(&question.body).await?;

        let Err(cause) = self.insert_options(id, &question.options).await else {
            tracing::debug!(question_id = id, options = question.options.len(), "question created");
            return Ok(id);
        };

        tracing::warn!(question_id = id, error = %cause, "option insert failed, deleting question");
        if let Err(cleanup) = self.delete(id).await {
            tracing::error!(
                question_id = id,
                error = %cleanup,
                "compensating delete failed, question row may be orphaned"
            );
            return Err(CompensationError {
                question_id: id,
                cause: Box::new(cause),
                cleanup: Box::new(cleanup),
            }
            .into());
        }

        Err(cause)
    }

    async fn update(&self, question: &Question) -> Result<()> {
        let mut tx = self.pool.begin().await.during("start transaction")?;

        let updated = sqlx::query("UPDATE questions SET body = ? WHERE id = ?")
            .bind(&question.body)
            .bind(question.id)
            .execute(&mut *tx)
            .await
            .during("update question")?
            .rows_affected();

        // Dropping the transaction rolls it back.
        if updated == 0 {
            return Err(Error::NotFound { id: question.id });
        }

        sqlx::query("DELETE FROM options WHERE questionId = ?")
            .bind(question.id)
            .execute(&mut *tx)
            .await
            .during("delete options")?;

        write_options(&mut tx, question.id, &question.options).await?;

        tx.commit().await.during("commit transaction")?;
        tracing::debug!(question_id = question.id, "question replaced");
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tx = self.pool.begin().await.during("start transaction")?;

        sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .during("delete question")?;

        // Redundant with ON DELETE CASCADE, kept for databases created without it.
        sqlx::query("DELETE FROM options WHERE questionId = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .during("delete options")?;

        tx.commit().await.during("commit transaction")?;
        Ok(())
    }

    async fn list_all(&self, page: Page) -> Result<Vec<Question>> {
        let rows: Vec<QuestionRow> = if page.is_seek() {
            sqlx::query_as("SELECT id, body FROM questions WHERE id < ? ORDER BY id DESC LIMIT ?")
                .bind(page.last_id)
                .bind(i64::from(page.size))
                .fetch_all(&self.pool)
                .await
                .during("query questions")?
        } else {
            // Order is not part of the contract without a cursor.
            sqlx::query_as("SELECT id, body FROM questions ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .during("query questions")?
        };

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            let options = self.options_for(row.id).await?;
            questions.push(Question {
                id: row.id,
                body: row.body,
                options,
            });
        }

        Ok(questions)
    }
}
