//! Twitch live notification rendering.

use crate::model::snapshot::StreamSnapshot;
use crate::presenter::{DisplayPayload, PayloadButton};

const TWITCH_COLOR: u32 = 0x9146FF;

pub fn render_stream(live: &StreamSnapshot) -> DisplayPayload {
    let stream_url = format!("https://www.twitch.tv/{}", live.login);

    let mut payload = DisplayPayload::new(
        format!("🔴 {} is now live!", live.user_name),
        format!("**{}**\n[Watch now]({})", live.title, stream_url),
        TWITCH_COLOR,
    )
    .field(
        "🎮 Game",
        if live.game_name.is_empty() {
            "Not set".to_string()
        } else {
            live.game_name.clone()
        },
        true,
    )
    .field("👥 Viewers", live.viewer_count.to_string(), true)
    .footer("Twitch")
    .button(PayloadButton::link(live.user_name.clone(), stream_url));

    if let Some(url) = &live.profile_image_url {
        payload = payload.thumbnail(url.clone());
    }
    if let Some(url) = &live.thumbnail_url {
        payload = payload.image(url.clone());
    }

    payload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_link_button_to_the_stream() {
        let payload = render_stream(&StreamSnapshot {
            login: "somecaster".to_string(),
            user_name: "SomeCaster".to_string(),
            title: "Speedrunning all day".to_string(),
            game_name: "Clash of Clans".to_string(),
            viewer_count: 321,
            thumbnail_url: None,
            profile_image_url: None,
        });

        assert_eq!(payload.buttons.len(), 1);
        assert_eq!(
            payload.buttons[0].url.as_deref(),
            Some("https://www.twitch.tv/somecaster")
        );
        assert!(payload.title.contains("SomeCaster"));
    }
}
