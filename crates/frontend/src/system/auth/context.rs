use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<UserInfo>,
}

/// Auth context shared through the component tree.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn user(&self) -> Option<UserInfo> {
        self.state.get().user
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.user.is_some())
    }

    pub fn access_token(&self) -> Option<String> {
        self.state.with(|s| s.access_token.clone())
    }

    pub fn set_session(&self, access_token: String, user: UserInfo) {
        storage::save_access_token(&access_token);
        self.state.set(AuthState {
            access_token: Some(access_token),
            user: Some(user),
        });
    }

    pub fn clear_session(&self) {
        storage::clear_access_token();
        self.state.set(AuthState::default());
    }

    /// Sign out: revoke the token on the server, then drop the local session.
    ///
    /// The local session is cleared even when the revoke call fails.
    pub async fn sign_out(&self) -> Result<(), String> {
        let token = self.access_token();
        self.clear_session();
        if let Some(token) = token {
            api::sign_out(&token).await?;
        }
        Ok(())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let state = RwSignal::new(AuthState::default());
    let context = AuthContext { state };

    // Try to restore a session from localStorage on mount
    Effect::new(move |_| {
        spawn_local(async move {
            let Some(access_token) = storage::get_access_token() else {
                return;
            };
            // Validate the token by fetching the current user
            match api::get_current_user(&access_token).await {
                Ok(Some(user)) => {
                    state.set(AuthState {
                        access_token: Some(access_token),
                        user: Some(user),
                    });
                }
                Ok(None) => {
                    // Token no longer valid
                    storage::clear_access_token();
                }
                Err(err) => {
                    log::warn!("Не удалось восстановить сессию: {}", err);
                }
            }
        });
    });

    provide_context(context);

    children()
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
