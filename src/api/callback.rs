use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::PkceToken, warning, youtube};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceToken>>>>,
) -> Html<&'static str> {
    let mut state = shared_state.lock().await;
    let Some(pkce_state) = state.as_mut() else {
        return Html("<h4>Missing PKCE code verifier.</h4>");
    };

    if let Some(reason) = params.get("error") {
        pkce_state.failure = Some(reason.clone());
        return Html("<h4>Login was denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let verifier = pkce_state.code_verifier.clone();
    let redirect_uri = pkce_state.redirect_uri.clone();

    match youtube::auth::exchange_code_pkce(code, &verifier, &redirect_uri).await {
        Ok(token) => {
            pkce_state.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            pkce_state.failure = Some(e.to_string());
            Html("<h4>Login failed.</h4>")
        }
    }
}
