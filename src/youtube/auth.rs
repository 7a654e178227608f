use std::{sync::Arc, time::Duration};

use chrono::{Local, Utc};
use reqwest::{Client, Url};
use tokio::sync::Mutex;

use crate::{
    Res, config,
    server::start_api_server,
    success,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// Runs the installed-app OAuth flow and returns a fresh access token.
///
/// Starts the callback server on the configured address (an OS-assigned port
/// by default), opens the consent page in the browser and waits until the
/// callback has exchanged the authorization code. Waits as long as it takes.
pub async fn authenticate() -> Res<Token> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(None));
    let server = start_api_server(Arc::clone(&shared_state)).await?;
    let redirect_uri = format!("http://localhost:{}/", server.addr.port());

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier,
            redirect_uri: redirect_uri.clone(),
            token: None,
            failure: None,
        });
    }

    let auth_url = match authorization_url(&redirect_uri, &code_challenge) {
        Ok(url) => url,
        Err(e) => {
            server.stop().await;
            return Err(e);
        }
    };

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state).await;
    server.stop().await;
    let token = token?;

    if !token.grants(config::YOUTUBE_SCOPE) {
        warning!(
            "Granted scopes \"{}\" do not include {}",
            token.scope,
            config::YOUTUBE_SCOPE
        );
    }

    match token.expires_at() {
        Some(at) => success!(
            "Authentication successful! Access valid until {}",
            at.with_timezone(&Local).format("%H:%M:%S")
        ),
        None => success!("Authentication successful!"),
    }
    Ok(token)
}

pub fn authorization_url(redirect_uri: &str, code_challenge: &str) -> Res<Url> {
    let client_id = config::youtube_client_id();
    let url = Url::parse_with_params(
        &config::google_auth_url(),
        &[
            ("client_id", client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("scope", config::YOUTUBE_SCOPE),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
        ],
    )?;
    Ok(url)
}

async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Res<Token> {
    loop {
        {
            let lock = shared_state.lock().await;
            if let Some(pkce_token) = lock.as_ref() {
                if let Some(token) = &pkce_token.token {
                    return Ok(token.clone());
                }
                if let Some(failure) = &pkce_token.failure {
                    return Err(format!("Authentication failed: {}", failure).into());
                }
            }
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
}

pub async fn exchange_code_pkce(code: &str, verifier: &str, redirect_uri: &str) -> Res<Token> {
    let client_id = config::youtube_client_id();
    let client_secret = config::youtube_client_secret();

    let client = Client::new();
    let res = client
        .post(config::google_token_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(format!("token exchange failed: {} {}", status, body).into());
    }

    let json: TokenResponse = res.json().await?;

    Ok(Token {
        access_token: json.access_token,
        scope: json.scope,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp(),
    })
}
