use chrono::{TimeZone, Utc};
use songsync::{config, types::Token};

fn token(scope: &str) -> Token {
    Token {
        access_token: "ya29.token".to_string(),
        scope: scope.to_string(),
        expires_in: 3599,
        obtained_at: 1_700_000_000,
    }
}

#[test]
fn test_expires_at_adds_lifetime_to_obtained_at() {
    assert_eq!(
        token(config::YOUTUBE_SCOPE).expires_at(),
        Some(Utc.timestamp_opt(1_700_003_599, 0).unwrap())
    );
}

#[test]
fn test_grants_matches_whole_scopes() {
    let granted = token(&format!("openid {}", config::YOUTUBE_SCOPE));
    assert!(granted.grants(config::YOUTUBE_SCOPE));

    let readonly = token("https://www.googleapis.com/auth/youtube.readonly");
    assert!(!readonly.grants(config::YOUTUBE_SCOPE));
    assert!(!token("").grants(config::YOUTUBE_SCOPE));
}
