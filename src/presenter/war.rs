//! War and war-league board rendering.

use crate::model::snapshot::{WarSnapshot, WarState};
use crate::presenter::{clamp_page, page_count, page_slice, DisplayPayload};

const WAR_COLOR: u32 = 0xFFD700;
const LEAGUE_COLOR: u32 = 0x1E90FF;

pub fn render_war(war: &WarSnapshot, page: usize) -> DisplayPayload {
    let members: Vec<_> = war
        .clan
        .members
        .iter()
        .chain(war.opponent.members.iter())
        .collect();

    let page = clamp_page(page, members.len());
    let pages = page_count(members.len());

    let state_line = match war.state {
        WarState::Preparation => "Preparation day",
        WarState::InWar => "Battle day",
        WarState::Ended => "War ended",
    };

    let title = if war.league {
        format!("{} ⚔️ {} (Clan War League)", war.clan.name, war.opponent.name)
    } else {
        format!("{} ⚔️ {}", war.clan.name, war.opponent.name)
    };

    let description = format!(
        "**{} stars : {} stars** — {}",
        war.clan.stars, war.opponent.stars, state_line
    );

    let mut details = String::new();
    for member in page_slice(&members, page) {
        details.push_str(&format!(
            "**{}** (TH {}) ⭐{} ⚔️{}\n",
            member.name, member.town_hall_level, member.stars, member.attacks_used
        ));
    }
    if details.is_empty() {
        details.push_str("No players available");
    }

    let color = if war.league { LEAGUE_COLOR } else { WAR_COLOR };

    let mut payload = DisplayPayload::new(title, description, color)
        .field(
            "⭐ Stars",
            format!("{} / {}", war.clan.stars, war.opponent.stars),
            true,
        )
        .field(
            "⚔️ Attacks",
            format!("{} / {}", war.clan.attacks, war.opponent.attacks),
            true,
        )
        .field("🏰 Clan level", war.clan.level.to_string(), true)
        .field(
            "Players per clan",
            format!(
                "{} vs {}",
                war.clan.members.len(),
                war.opponent.members.len()
            ),
            true,
        )
        .field("Player details", details, false)
        .footer(format!("Page {}/{}", page + 1, pages))
        .pages(page, pages);

    if let Some(badge) = &war.clan.badge_url {
        payload = payload.thumbnail(badge.clone());
    }

    payload
}
