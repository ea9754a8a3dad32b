//! Like/Dislike toggling.

use std::str::FromStr;

use serde::Deserialize;

use crate::config::PageConfig;
use crate::error::PageError;
use crate::ports::{HttpPort, Mutation, Target};
use crate::request::FormPost;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LikeAction {
    Like,
    Dislike,
}

impl LikeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            LikeAction::Like => "like",
            LikeAction::Dislike => "dislike",
        }
    }
}

impl FromStr for LikeAction {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "like" => Ok(LikeAction::Like),
            "dislike" => Ok(LikeAction::Dislike),
            other => Err(PageError::UnknownAction(other.to_string())),
        }
    }
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToggleLikeResponse {
    pub success: bool,
    pub likes: Option<u64>,
    pub dislikes: Option<u64>,
}

pub fn toggle_url(game_id: &str) -> String {
    format!("/games/{game_id}/toggle-like/")
}

/// Count label of the first `kind` button for `game_id`. Further buttons for the same
/// game keep their old count.
pub fn count_target(kind: &str, game_id: &str) -> Target {
    Target::Descendant {
        parent: format!(".{kind}-btn[data-game-id=\"{game_id}\"]"),
        child: format!(".{kind}-count"),
    }
}

/// POST the toggle and resolve to the count updates plus the pulse on the clicked
/// control. Nothing is returned unless the server reports success.
pub async fn toggle_like(
    http: &impl HttpPort,
    cookies: &str,
    config: &PageConfig,
    game_id: &str,
    action: LikeAction,
) -> Result<Vec<Mutation>, PageError> {
    let form = format!("action={}", action.as_str());
    let request = FormPost::new(toggle_url(game_id), Some(form))
        .authenticated(cookies, &config.csrf_cookie);
    let body = http.post_form(&request).await?;
    let response: ToggleLikeResponse = serde_json::from_str(&body)?;
    if !response.success {
        return Err(PageError::Rejected);
    }

    let mut mutations = Vec::with_capacity(4);
    if let Some(likes) = response.likes {
        mutations.push(Mutation::SetText {
            target: count_target("like", game_id),
            text: likes.to_string(),
        });
    }
    if let Some(dislikes) = response.dislikes {
        mutations.push(Mutation::SetText {
            target: count_target("dislike", game_id),
            text: dislikes.to_string(),
        });
    }
    mutations.push(Mutation::AddClass {
        target: Target::Activated,
        class: config.active_class.clone(),
    });
    mutations.push(Mutation::RemoveClassAfter {
        target: Target::Activated,
        class: config.active_class.clone(),
        delay_ms: config.pulse_ms,
    });
    Ok(mutations)
}
