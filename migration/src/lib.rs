pub use sea_orm_migration::prelude::*;

mod m20260701_000001_create_tracked_entity_table;
mod m20260701_000002_create_event_channel_table;
mod m20260701_000003_create_rendered_record_table;
mod m20260702_000004_create_verified_user_table;
mod m20260702_000005_create_clan_games_tables;
mod m20260703_000006_create_page_session_table;
mod m20260703_000007_create_ticket_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260701_000001_create_tracked_entity_table::Migration),
            Box::new(m20260701_000002_create_event_channel_table::Migration),
            Box::new(m20260701_000003_create_rendered_record_table::Migration),
            Box::new(m20260702_000004_create_verified_user_table::Migration),
            Box::new(m20260702_000005_create_clan_games_tables::Migration),
            Box::new(m20260703_000006_create_page_session_table::Migration),
            Box::new(m20260703_000007_create_ticket_table::Migration),
        ]
    }
}
