//! Support ticket embeds: the persistent menu and the per-ticket intro.

use crate::model::ticket::{Ticket, TicketStatus};
use crate::presenter::{DisplayPayload, PayloadButton};

const TICKET_COLOR: u32 = 0x3498DB;

pub const OPEN_TICKET_ID: &str = "ticket:open";
pub const CLAIM_TICKET_ID: &str = "ticket:claim";
pub const CLOSE_TICKET_ID: &str = "ticket:close";

/// The single menu message maintained in the tickets channel.
pub fn render_ticket_menu() -> DisplayPayload {
    DisplayPayload::new(
        "🎫 Ticket Support",
        "Click the button below to open a ticket. \
         A private channel will be created for you and the support team.",
        TICKET_COLOR,
    )
    .button(PayloadButton::action("Open ticket", OPEN_TICKET_ID))
}

/// The first message posted into a freshly created ticket channel.
pub fn render_ticket_intro(ticket: &Ticket) -> DisplayPayload {
    let status_line = match ticket.status {
        TicketStatus::Open => "Waiting for a supporter to claim this ticket.",
        TicketStatus::Claimed => "A supporter is handling this ticket.",
        TicketStatus::Closed => "This ticket is closed.",
    };

    DisplayPayload::new(
        format!("Ticket #{}", ticket.id),
        format!("<@{}> describe your issue here.\n\n{}", ticket.user_id, status_line),
        TICKET_COLOR,
    )
    .button(PayloadButton::action("Claim", CLAIM_TICKET_ID))
    .button(PayloadButton::action("Close", CLOSE_TICKET_ID))
}
