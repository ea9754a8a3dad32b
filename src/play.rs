//! Play counter: reveal the game frame and bump the server-side play count.

use serde::Deserialize;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::ports::{Display, HttpPort, Mutation, Target};
use crate::request::FormPost;

pub const START_BUTTON_ID: &str = "increment-play";
pub const FRAME_ID: &str = "game-frame";
pub const PLACEHOLDER_ID: &str = "game-placeholder";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PlayCountResponse {
    pub success: bool,
    pub play_count: Option<u64>,
}

/// Hide the placeholder and show the frame. Applied before the request and never
/// reverted.
pub fn reveal_game() -> Vec<Mutation> {
    vec![
        Mutation::SetDisplay {
            target: Target::Id(PLACEHOLDER_ID.to_string()),
            display: Display::None,
        },
        Mutation::SetDisplay {
            target: Target::Id(FRAME_ID.to_string()),
            display: Display::Block,
        },
    ]
}

/// Last non-empty segment of a URL path, e.g. `/games/42/` -> `42`.
pub fn game_id_from_path(path: &str) -> Option<&str> {
    path.split('/').filter(|s| !s.is_empty()).next_back()
}

pub fn increment_url(game_id: &str) -> String {
    format!("/games/{game_id}/increment-play/")
}

pub async fn increment_play(
    http: &impl HttpPort,
    cookies: &str,
    config: &PageConfig,
    game_id: &str,
) -> Result<Vec<Mutation>, PageError> {
    let request =
        FormPost::new(increment_url(game_id), None).authenticated(cookies, &config.csrf_cookie);
    let body = http.post_form(&request).await?;
    let response: PlayCountResponse = serde_json::from_str(&body)?;
    if !response.success {
        return Err(PageError::Rejected);
    }
    Ok(response
        .play_count
        .map(|count| Mutation::SetText {
            target: Target::Selector(".play-count".to_string()),
            text: config.play_count_text(count),
        })
        .into_iter()
        .collect())
}
