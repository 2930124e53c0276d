//! Application wiring: configuration to a ready journal.
//!
//! Opens (or creates) the SQLite database, runs migrations, and resolves the
//! configured profile to the owning [`UserId`]. The profile section of the
//! config is the identity collaborator here: the journal core trusts the
//! owner it supplies and performs no credential checks of its own.

use chrono::Utc;
use tracing::info;

use crate::adapter::sqlite::{
    configure_sqlite_connection, create_pool, run_migrations, SqliteStore,
};
use crate::config::Config;
use crate::domain::{User, UserId};
use crate::error::{Error, Result};
use crate::journal::Journal;
use crate::port::UserStore;

/// A ready-to-use journal bound to the profile owner.
pub struct App {
    journal: Journal<SqliteStore>,
    owner: UserId,
}

impl App {
    /// Open the journal database and resolve the profile owner,
    /// provisioning the account on first run.
    pub async fn open(config: &Config) -> Result<Self> {
        if let Some(dir) = config.database.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let pool = create_pool(&config.database_url())?;
        run_migrations(&pool)?;
        {
            let mut conn = pool
                .get()
                .map_err(|e| Error::Connection(e.to_string()))?;
            configure_sqlite_connection(&mut conn)?;
        }

        let store = SqliteStore::new(pool);
        let owner = resolve_owner(&store, config).await?;

        Ok(Self {
            journal: Journal::new(store),
            owner,
        })
    }

    /// The trade record manager.
    #[must_use]
    pub fn journal(&self) -> &Journal<SqliteStore> {
        &self.journal
    }

    /// The authenticated owner every operation runs as.
    #[must_use]
    pub fn owner(&self) -> &UserId {
        &self.owner
    }
}

/// Register a new account, rejecting duplicate emails.
pub async fn register_user<S: UserStore>(store: &S, name: &str, email: &str) -> Result<User> {
    if store.find_by_email(email).await?.is_some() {
        return Err(Error::DuplicateUser {
            email: email.to_string(),
        });
    }

    let user = User::try_new(name, email, Utc::now())?;
    store.insert(&user).await?;
    info!(user = %user.id, email = %user.email, "registered account");
    Ok(user)
}

async fn resolve_owner(store: &SqliteStore, config: &Config) -> Result<UserId> {
    if let Some(user) = store.find_by_email(&config.profile.email).await? {
        return Ok(user.id);
    }
    let user = register_user(store, &config.profile.name, &config.profile.email).await?;
    Ok(user.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MemoryStore;

    #[tokio::test]
    async fn register_user_rejects_duplicate_email() {
        let store = MemoryStore::new();

        register_user(&store, "Demo User", "demo@crypto.com")
            .await
            .unwrap();
        let err = register_user(&store, "Other User", "demo@crypto.com")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::DuplicateUser { .. }));
    }

    #[tokio::test]
    async fn register_user_surfaces_validation_errors() {
        let store = MemoryStore::new();
        let err = register_user(&store, "X", "demo@crypto.com")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
