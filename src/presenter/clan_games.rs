//! Clan games progress board rendering.

use crate::model::snapshot::ClanGamesSnapshot;
use crate::presenter::{clamp_page, page_count, page_slice, DisplayPayload};

const CLAN_GAMES_COLOR: u32 = 0x32CD32;
/// Individual point cap per player in clan games.
pub const MAX_PLAYER_POINTS: i32 = 4000;
const BAR_WIDTH: usize = 20;

/// Text progress bar of `BAR_WIDTH` cells.
fn progress_bar(points: i32, max: i32) -> String {
    let filled = if max <= 0 {
        0
    } else {
        ((points.max(0) as usize) * BAR_WIDTH / max as usize).min(BAR_WIDTH)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn render_clan_games(games: &ClanGamesSnapshot, page: usize) -> DisplayPayload {
    let page = clamp_page(page, games.players.len());
    let pages = page_count(games.players.len());

    let percentage = if games.target_points > 0 {
        (games.total_points as f64 / games.target_points as f64 * 100.0).min(100.0)
    } else {
        0.0
    };

    let mut player_details = String::new();
    for player in page_slice(&games.players, page) {
        player_details.push_str(&format!(
            "**{}:** {} points [`{}`]\n",
            player.name,
            player.points,
            progress_bar(player.points, MAX_PLAYER_POINTS)
        ));
    }
    if player_details.is_empty() {
        player_details.push_str("No player points recorded yet");
    }

    DisplayPayload::new(
        "🎮 Clan Games Progress",
        format!(
            "**Total: {} / {} points**",
            games.total_points, games.target_points
        ),
        CLAN_GAMES_COLOR,
    )
    .field("Start", format!("<t:{}:R>", games.start_time.timestamp()), true)
    .field("End", format!("<t:{}:R>", games.end_time.timestamp()), true)
    .field(
        "Overall",
        format!(
            "[`{}`] {:.2}%",
            progress_bar(games.total_points, games.target_points),
            percentage
        ),
        false,
    )
    .field("Player progress", player_details, false)
    .footer(format!("Page {}/{}", page + 1, pages))
    .pages(page, pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::snapshot::ClanGamesPlayer;
    use chrono::{TimeZone, Utc};

    fn snapshot(players: Vec<ClanGamesPlayer>, total: i32) -> ClanGamesSnapshot {
        ClanGamesSnapshot {
            start_time: Utc.with_ymd_and_hms(2026, 7, 22, 8, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2026, 7, 28, 8, 0, 0).unwrap(),
            target_points: 50_000,
            total_points: total,
            players,
        }
    }

    #[test]
    fn full_bar_at_cap_and_empty_bar_at_zero() {
        assert_eq!(progress_bar(4000, 4000), "█".repeat(20));
        assert_eq!(progress_bar(0, 4000), "░".repeat(20));
        assert_eq!(progress_bar(2000, 4000).matches('█').count(), 10);
    }

    #[test]
    fn renders_totals_and_percentage() {
        let payload = render_clan_games(
            &snapshot(
                vec![ClanGamesPlayer {
                    name: "Zed".to_string(),
                    points: 4000,
                }],
                25_000,
            ),
            0,
        );
        assert!(payload.description.contains("25000 / 50000"));
        assert!(payload.fields.iter().any(|f| f.value.contains("50.00%")));
    }

    #[test]
    fn empty_roster_still_renders_one_page() {
        let payload = render_clan_games(&snapshot(Vec::new(), 0), 5);
        assert_eq!(payload.page, 0);
        assert_eq!(payload.page_count, 1);
    }
}
