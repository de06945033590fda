//! Chat platform error taxonomy.
//!
//! The reconciler branches on these kinds: `NotFound` means the stored
//! message was deleted out of band and the record should be treated as
//! absent; `Permission` means the bot lacks channel access and no retry will
//! help without human intervention.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("message or channel not found")]
    NotFound,

    #[error("missing access to channel")]
    Permission,

    #[error(transparent)]
    Discord(#[from] Box<serenity::Error>),
}

impl ChatError {
    /// Maps a serenity error onto the taxonomy by HTTP status.
    pub fn from_discord(err: serenity::Error) -> Self {
        if let serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(ref resp)) = err
        {
            match resp.status_code.as_u16() {
                404 => return ChatError::NotFound,
                403 => return ChatError::Permission,
                _ => {}
            }
        }
        ChatError::Discord(Box::new(err))
    }
}
