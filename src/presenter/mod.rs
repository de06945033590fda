//! Pure rendering of observed state into display payloads.
//!
//! `render` is deterministic for identical input, which is what makes the
//! hash-based change detection in the reconciler work. All text is clamped to
//! the platform limits here so no caller can push an oversized embed.

pub mod clan_games;
pub mod stream;
pub mod ticket;
pub mod war;

use serde::Serialize;
use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateEmbed, CreateEmbedFooter, CreateMessage,
    EditMessage,
};

use crate::model::snapshot::Snapshot;

/// Sub-items shown per page (war participants, clan games players).
pub const PAGE_SIZE: usize = 10;
/// Discord's per-field value limit.
pub const FIELD_VALUE_LIMIT: usize = 1024;
/// Description limit used by the boards.
pub const DESCRIPTION_LIMIT: usize = 2048;

/// Platform-agnostic message content: embed parts plus optional buttons and
/// the pagination position it was rendered at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayPayload {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub fields: Vec<PayloadField>,
    pub footer: Option<String>,
    pub thumbnail_url: Option<String>,
    pub image_url: Option<String>,
    pub buttons: Vec<PayloadButton>,
    pub page: usize,
    pub page_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A button attached to the message: either a link button or an interaction
/// button carrying a custom id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadButton {
    pub label: String,
    pub url: Option<String>,
    pub custom_id: Option<String>,
}

impl PayloadButton {
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: Some(url.into()),
            custom_id: None,
        }
    }

    pub fn action(label: impl Into<String>, custom_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: None,
            custom_id: Some(custom_id.into()),
        }
    }
}

impl DisplayPayload {
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: truncate(&description.into(), DESCRIPTION_LIMIT),
            color,
            fields: Vec::new(),
            footer: None,
            thumbnail_url: None,
            image_url: None,
            buttons: Vec::new(),
            page: 0,
            page_count: 1,
        }
    }

    /// Appends a field, clamping the value to the platform limit.
    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(PayloadField {
            name: name.into(),
            value: truncate(&value.into(), FIELD_VALUE_LIMIT),
            inline,
        });
        self
    }

    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail_url = Some(url.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn button(mut self, button: PayloadButton) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn pages(mut self, page: usize, page_count: usize) -> Self {
        self.page = page;
        self.page_count = page_count;
        self
    }
}

/// Renders a snapshot at the given page index (zero-based, clamped by the
/// feature renderers).
pub fn render(snapshot: &Snapshot, page: usize) -> DisplayPayload {
    match snapshot {
        Snapshot::War(war) => war::render_war(war, page),
        Snapshot::ClanGames(games) => clan_games::render_clan_games(games, page),
        Snapshot::Stream(live) => stream::render_stream(live),
    }
}

/// Number of pages needed for `total_items` sub-items; never zero so empty
/// lists still render one page.
pub fn page_count(total_items: usize) -> usize {
    total_items.div_ceil(PAGE_SIZE).max(1)
}

/// Clamps a requested page index to the last valid page.
pub fn clamp_page(page: usize, total_items: usize) -> usize {
    page.min(page_count(total_items) - 1)
}

/// The sub-item slice visible on a (clamped) page.
pub fn page_slice<T>(items: &[T], page: usize) -> &[T] {
    let page = clamp_page(page, items.len());
    let start = page * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Hard-truncates to `limit` characters, ending in `...` when cut.
pub fn truncate(value: &str, limit: usize) -> String {
    if value.chars().count() <= limit {
        return value.to_string();
    }

    let mut truncated: String = value.chars().take(limit.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}

/// Builds the serenity embed for a payload.
pub fn to_embed(payload: &DisplayPayload) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&payload.title)
        .description(&payload.description)
        .color(payload.color);

    for field in &payload.fields {
        embed = embed.field(&field.name, &field.value, field.inline);
    }

    if let Some(footer) = &payload.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }
    if let Some(url) = &payload.thumbnail_url {
        embed = embed.thumbnail(url);
    }
    if let Some(url) = &payload.image_url {
        embed = embed.image(url);
    }

    embed
}

/// Builds the button rows for a payload; empty when there are no buttons.
pub fn to_components(payload: &DisplayPayload) -> Vec<CreateActionRow> {
    if payload.buttons.is_empty() {
        return Vec::new();
    }

    let buttons = payload
        .buttons
        .iter()
        .map(|button| match (&button.url, &button.custom_id) {
            (Some(url), _) => CreateButton::new_link(url).label(&button.label),
            (None, Some(custom_id)) => CreateButton::new(custom_id)
                .label(&button.label)
                .style(ButtonStyle::Primary),
            (None, None) => CreateButton::new("noop").label(&button.label),
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

pub fn to_create_message(payload: &DisplayPayload) -> CreateMessage {
    CreateMessage::new()
        .embed(to_embed(payload))
        .components(to_components(payload))
}

pub fn to_edit_message(payload: &DisplayPayload) -> EditMessage {
    // Components are always replaced so stale buttons cannot linger.
    EditMessage::new()
        .embed(to_embed(payload))
        .components(to_components(payload))
}
