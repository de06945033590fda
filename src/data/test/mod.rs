mod event_channel;
mod page_session;
mod rendered_record;
mod tracked_entity;
mod verified_user;
