//! Anonymous usage tracking.
//!
//! Visitors get a locally stored anonymous id; after a successful sign-in the
//! records collected under that id are migrated to the authenticated user.

use std::future::Future;

use contracts::system::auth::UserInfo;
use contracts::usecases::usage::MigrateUsageRequest;
use gloo_net::http::Request;
use uuid::Uuid;
use web_sys::window;

use crate::shared::api_utils::api_url;
use crate::system::auth::api;

const ANONYMOUS_ID_KEY: &str = "usage_anonymous_id";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Anonymous id of this browser, if one was ever assigned.
pub fn stored_anonymous_id() -> Option<Uuid> {
    let raw = get_local_storage()?.get_item(ANONYMOUS_ID_KEY).ok()??;
    Uuid::parse_str(&raw).ok()
}

/// Anonymous id of this browser, assigning a fresh one if needed.
pub fn ensure_anonymous_id() -> Option<Uuid> {
    if let Some(id) = stored_anonymous_id() {
        return Some(id);
    }
    let id = Uuid::new_v4();
    let storage = get_local_storage()?;
    storage.set_item(ANONYMOUS_ID_KEY, &id.to_string()).ok()?;
    Some(id)
}

fn clear_anonymous_id() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ANONYMOUS_ID_KEY);
    }
}

/// Move the anonymous usage records of this browser to `user_id`.
///
/// A no-op when no anonymous id was ever assigned. The stored id is cleared
/// only after the backend confirms the migration.
pub async fn migrate_anonymous_usage(user_id: String) -> Result<(), String> {
    let Some(anonymous_id) = stored_anonymous_id() else {
        return Ok(());
    };
    let request = MigrateUsageRequest {
        anonymous_id,
        user_id,
    };

    let response = Request::post(&api_url("/api/usecases/usage/migrate"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Usage migration failed: {}", response.status()));
    }

    clear_anonymous_id();
    Ok(())
}

/// The sequence behind a successful authentication: fetch the now-current
/// identity and, if present, migrate the anonymous usage records to it.
///
/// Every failure is logged and swallowed; authentication itself already
/// succeeded, so nothing here may propagate to the caller. Returns whether a
/// migration ran to completion.
pub async fn migrate_after_auth<F, FFut, M, MFut>(fetch_user: F, migrate: M) -> bool
where
    F: FnOnce() -> FFut,
    FFut: Future<Output = Result<Option<UserInfo>, String>>,
    M: FnOnce(String) -> MFut,
    MFut: Future<Output = Result<(), String>>,
{
    match fetch_user().await {
        Ok(Some(user)) => match migrate(user.id).await {
            Ok(()) => true,
            Err(err) => {
                log::error!("Не удалось перенести анонимную статистику: {}", err);
                false
            }
        },
        Ok(None) => false,
        Err(err) => {
            log::error!("Ошибка при завершении входа: {}", err);
            false
        }
    }
}

/// `migrate_after_auth` wired to the real auth API and migration endpoint.
pub async fn run_post_auth_migration(access_token: String) {
    migrate_after_auth(
        move || async move { api::get_current_user(&access_token).await },
        migrate_anonymous_usage,
    )
    .await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn user(id: &str) -> UserInfo {
        UserInfo {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            display_name: None,
        }
    }

    #[test]
    fn migrates_exactly_once_with_the_fetched_id() {
        let migrated = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = migrated.clone();

        let ran = block_on(migrate_after_auth(
            || async { Ok(Some(user("u1"))) },
            move |id| {
                sink.borrow_mut().push(id);
                async { Ok(()) }
            },
        ));

        assert!(ran);
        assert_eq!(*migrated.borrow(), vec!["u1".to_string()]);
    }

    #[test]
    fn fetch_failure_skips_migration_and_does_not_panic() {
        let migrated = Rc::new(RefCell::new(0));
        let sink = migrated.clone();

        let ran = block_on(migrate_after_auth(
            || async { Err("network down".to_string()) },
            move |_id| {
                *sink.borrow_mut() += 1;
                async { Ok(()) }
            },
        ));

        assert!(!ran);
        assert_eq!(*migrated.borrow(), 0);
    }

    #[test]
    fn absent_identity_skips_migration() {
        let ran = block_on(migrate_after_auth(
            || async { Ok(None) },
            |_id| async { Ok(()) },
        ));
        assert!(!ran);
    }

    #[test]
    fn migration_failure_is_swallowed() {
        let ran = block_on(migrate_after_auth(
            || async { Ok(Some(user("u1"))) },
            |_id| async { Err("backend unavailable".to_string()) },
        ));
        assert!(!ran);
    }
}
