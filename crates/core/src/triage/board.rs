//! Kanban board state: status columns, drag highlight counters and drops.

use tracing::debug;

use super::{Ticket, TicketPatch, TicketStatus, TriageError, TriageService};

/// Tickets split into the three status columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardColumns {
    pub new: Vec<Ticket>,
    pub in_progress: Vec<Ticket>,
    pub completed: Vec<Ticket>,
}

impl BoardColumns {
    /// Partition a snapshot, keeping relative order within each column.
    pub fn from_tickets(tickets: Vec<Ticket>) -> Self {
        let mut columns = Self::default();
        for ticket in tickets {
            match ticket.ticket_status {
                TicketStatus::New => columns.new.push(ticket),
                TicketStatus::InProgress => columns.in_progress.push(ticket),
                TicketStatus::Completed => columns.completed.push(ticket),
            }
        }
        columns
    }

    pub fn column(&self, status: TicketStatus) -> &[Ticket] {
        match status {
            TicketStatus::New => &self.new,
            TicketStatus::InProgress => &self.in_progress,
            TicketStatus::Completed => &self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.new.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Per-column enter/leave counters.
///
/// Nested elements inside a column fire their own enter/leave events, so a
/// single boolean would flicker. A column is highlighted while its counter
/// is above zero.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    counters: [u32; 3],
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, status: TicketStatus) {
        self.counters[status.column()] += 1;
    }

    pub fn leave(&mut self, status: TicketStatus) {
        let counter = &mut self.counters[status.column()];
        *counter = counter.saturating_sub(1);
    }

    pub fn is_drag_over(&self, status: TicketStatus) -> bool {
        self.counters[status.column()] > 0
    }

    /// Clear the highlight of the column that received the drop.
    pub fn drop_on(&mut self, status: TicketStatus) {
        self.counters[status.column()] = 0;
    }
}

/// What a dragged card carries: its ID and the status it had when picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub ticket_id: String,
    pub status: TicketStatus,
}

impl DragPayload {
    pub fn for_ticket(ticket: &Ticket) -> Self {
        Self {
            ticket_id: ticket.id.clone(),
            status: ticket.ticket_status,
        }
    }

    /// Patch to apply for a drop on `target`, or `None` for the same column.
    pub fn drop_patch(&self, target: TicketStatus) -> Option<TicketPatch> {
        if self.status == target {
            None
        } else {
            Some(TicketPatch::new().with_status(target))
        }
    }
}

/// Apply a drop through the service.
///
/// Dropping on the column the card came from issues no call at all and
/// returns `Ok(None)`.
pub async fn move_ticket(
    service: &dyn TriageService,
    payload: &DragPayload,
    target: TicketStatus,
) -> Result<Option<Ticket>, TriageError> {
    let Some(patch) = payload.drop_patch(target) else {
        debug!(ticket_id = %payload.ticket_id, status = %target, "Dropped on same column");
        return Ok(None);
    };

    debug!(
        ticket_id = %payload.ticket_id,
        from = %payload.status,
        to = %target,
        "Moving ticket"
    );
    let ticket = service.update_ticket(&payload.ticket_id, patch).await?;
    Ok(Some(ticket))
}
