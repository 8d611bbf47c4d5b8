//! Contact repository
//!
//! Handles the contacts table:
//! - create: INSERT ... RETURNING (id assigned by SQLite)
//! - list: page + full-table count inside one read transaction
//! - delete: NotFound when nothing was removed

use sqlx::{FromRow, SqlitePool};

use crate::models::{NewContact, Paginated, Pagination};

/// Contact record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Contact repository
pub struct ContactRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ContactRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a validated contact and return it with its new id.
    pub async fn create(&self, contact: NewContact) -> Result<Contact, DbError> {
        let created: Contact = sqlx::query_as(
            r#"
            INSERT INTO contacts (name, email, phone)
            VALUES (?, ?, ?)
            RETURNING id, name, email, phone
            "#,
        )
        .bind(contact.name.as_str())
        .bind(contact.email.as_str())
        .bind(contact.phone.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = created.id, "contact created");
        Ok(created)
    }

    /// List one page of contacts in insertion order.
    ///
    /// `total` counts the whole table, so an out-of-range page still
    /// reports how many contacts exist.
    pub async fn list(&self, page: Pagination) -> Result<Paginated<Contact>, DbError> {
        let mut tx = self.pool.begin().await?;

        let items: Vec<Contact> = sqlx::query_as(
            r#"
            SELECT id, name, email, phone
            FROM contacts
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(i64::from(page.limit()))
        .bind(page.offset() as i64)
        .fetch_all(&mut *tx)
        .await?;

        let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Paginated {
            items,
            total,
            page: page.page,
            limit: page.limit,
        })
    }

    /// Delete a contact by id.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "contact",
                id: id.to_string(),
            });
        }

        tracing::debug!(id, "contact deleted");
        Ok(())
    }

    /// Number of stored contacts. Backs the health check.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contacts")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::open_in_memory;

    fn contact(n: usize) -> NewContact {
        NewContact::new(
            &format!("Person {n}"),
            &format!("person{n}@example.com"),
            &format!("{:010}", n),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let pool = open_in_memory().await.unwrap();
        let repo = ContactRepo::new(&pool);

        let ann = repo
            .create(NewContact::new("Ann", "ann@x.com", "1234567890").unwrap())
            .await
            .unwrap();
        assert_eq!(
            ann,
            Contact {
                id: 1,
                name: "Ann".into(),
                email: "ann@x.com".into(),
                phone: "1234567890".into(),
            }
        );

        let second = repo.create(contact(2)).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn list_pages_and_total() {
        let pool = open_in_memory().await.unwrap();
        let repo = ContactRepo::new(&pool);
        for n in 1..=25 {
            repo.create(contact(n)).await.unwrap();
        }

        let first = repo.list(Pagination::new(1, 10)).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 25);
        assert_eq!(first.items[0].name, "Person 1");

        let third = repo.list(Pagination::new(3, 10)).await.unwrap();
        assert_eq!(third.items.len(), 5);
        assert_eq!(third.items[0].name, "Person 21");
        assert_eq!(third.total, 25);
        assert!(!third.has_next());
    }

    #[tokio::test]
    async fn out_of_range_page_is_empty_with_total() {
        let pool = open_in_memory().await.unwrap();
        let repo = ContactRepo::new(&pool);
        repo.create(contact(1)).await.unwrap();

        let page = repo.list(Pagination::new(7, 10)).await.unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn delete_succeeds_once() {
        let pool = open_in_memory().await.unwrap();
        let repo = ContactRepo::new(&pool);
        let created = repo.create(contact(1)).await.unwrap();

        repo.delete(created.id).await.unwrap();
        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "contact", .. }));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn ids_are_not_reused() {
        let pool = open_in_memory().await.unwrap();
        let repo = ContactRepo::new(&pool);
        let first = repo.create(contact(1)).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let next = repo.create(contact(2)).await.unwrap();
        assert!(next.id > first.id);
    }
}
