use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AccountId;
use crate::account::models::Identifier;
use crate::account::models::NewAccount;
use crate::account::ports::AccountDirectory;

const EMAIL_UNIQUE_CONSTRAINT: &str = "accounts_email_key";

pub struct PostgresAccountDirectory {
    pool: PgPool,
}

impl PostgresAccountDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct AccountRow {
    id: i64,
    email: String,
    password_hash: String,
    img_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AccountRow> for Account {
    type Error = AccountError;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        Ok(Account {
            id: AccountId(row.id),
            identifier: Identifier::new(row.email)?,
            credential_hash: row.password_hash,
            profile_uri: row.img_url,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl AccountDirectory for PostgresAccountDirectory {
    async fn insert(&self, account: NewAccount) -> Result<AccountId, AccountError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO accounts (email, password_hash, img_url)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(account.identifier.as_str())
        .bind(&account.credential_hash)
        .bind(account.profile_uri.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(EMAIL_UNIQUE_CONSTRAINT)
                {
                    return AccountError::IdentifierAlreadyExists(
                        account.identifier.as_str().to_string(),
                    );
                }
            }
            AccountError::DatabaseError(e.to_string())
        })?;

        Ok(AccountId(id))
    }

    async fn find_by_identifier(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, email, password_hash, img_url, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(identifier.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.map(Account::try_from).transpose()
    }
}
