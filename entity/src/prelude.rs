pub use super::clan_games_entry::Entity as ClanGamesEntry;
pub use super::clan_games_period::Entity as ClanGamesPeriod;
pub use super::event_channel::Entity as EventChannel;
pub use super::page_session::Entity as PageSession;
pub use super::rendered_record::Entity as RenderedRecord;
pub use super::ticket::Entity as Ticket;
pub use super::tracked_entity::Entity as TrackedEntity;
pub use super::verified_user::Entity as VerifiedUser;
