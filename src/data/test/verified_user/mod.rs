use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::data::verified_user::VerifiedUserRepository;
use crate::model::verified_user::UpsertVerifiedUserParam;

mod upsert;
mod warn;

fn upsert_param(discord_id: &str, player_tag: &str) -> UpsertVerifiedUserParam {
    UpsertVerifiedUserParam {
        discord_id: discord_id.to_string(),
        player_tag: player_tag.to_string(),
        player_name: "Player".to_string(),
        clan_role: "member".to_string(),
    }
}
