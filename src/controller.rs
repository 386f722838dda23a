//! Page controller of the withdrawal page.
//!
//! One controller owns one [`PageState`]. Every transition goes through it,
//! and what is visible is always derived from the state by [`visibility`].
//!
//! Lookups are split in two halves so that several can be in flight at once:
//! [`PageController::begin_lookup`] hands out a sequence-numbered
//! [`LookupTicket`], and [`PageController::apply_lookup`] applies a result
//! only if its ticket is still the latest one issued.

use crate::errors::LookupError;
use crate::i18n::Message;
use crate::lookup::LookupClient;
use crate::models::{ScanCode, StockCandidate};
use crate::render::{RenderContext, SelectionView, render_candidates};
use crate::scan::{ScanField, validate_submit};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Scanning,
    Selecting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub mode: ViewMode,
    pub scan_field: ScanField,
    pub selection: Option<SelectionView>,
    /// Blocking alert to show on the next render.
    pub alert: Option<Message>,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            mode: ViewMode::Scanning,
            scan_field: ScanField::focused(),
            selection: None,
            alert: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub scanner: bool,
    pub selection: bool,
    pub preview: bool,
    pub focus_scan_field: bool,
}

pub fn visibility(state: &PageState) -> Visibility {
    match state.mode {
        ViewMode::Scanning => Visibility {
            scanner: true,
            selection: false,
            preview: false,
            focus_scan_field: state.scan_field.is_focused(),
        },
        ViewMode::Selecting => Visibility {
            scanner: false,
            selection: true,
            preview: state
                .selection
                .as_ref()
                .is_some_and(|view| view.preview.is_some()),
            focus_scan_field: false,
        },
    }
}

/// Handle for one issued lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    seq: u64,
    code: ScanCode,
}

impl LookupTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn code(&self) -> &ScanCode {
        &self.code
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered { candidates: usize },
    Failed,
    Stale,
}

#[derive(Debug, Clone)]
pub struct PageController {
    state: PageState,
    ctx: RenderContext,
    issued: u64,
}

impl PageController {
    pub fn new(ctx: RenderContext) -> Self {
        Self {
            state: PageState::default(),
            ctx,
            issued: 0,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Enter in the scan field submits the form with the raw field value.
    /// The page script holds back Enter on a blank field, so a blank value
    /// here is a direct submission: it raises the fallback alert and
    /// refocuses the field.
    pub fn submit_form(&mut self, raw: &str) -> Option<LookupTicket> {
        self.state.scan_field.set_value(raw);
        match validate_submit(raw) {
            Ok(code) => Some(self.begin_lookup(code)),
            Err(message) => {
                self.state.alert = Some(message);
                self.state.scan_field.focus();
                None
            }
        }
    }

    pub fn begin_lookup(&mut self, code: ScanCode) -> LookupTicket {
        self.issued += 1;
        debug!(seq = self.issued, %code, "lookup issued");
        LookupTicket {
            seq: self.issued,
            code,
        }
    }

    pub fn apply_lookup(
        &mut self,
        ticket: &LookupTicket,
        result: Result<Vec<StockCandidate>, LookupError>,
    ) -> Applied {
        if ticket.seq != self.issued {
            debug!(
                seq = ticket.seq,
                latest = self.issued,
                code = %ticket.code,
                "discarding stale lookup response"
            );
            return Applied::Stale;
        }

        match result {
            Ok(candidates) => {
                info!(code = %ticket.code, count = candidates.len(), "lookup resolved");
                self.state.selection = Some(render_candidates(&candidates, &self.ctx));
                self.state.mode = ViewMode::Selecting;
                self.state.alert = None;
                Applied::Rendered {
                    candidates: candidates.len(),
                }
            }
            Err(err) => {
                error!(code = %ticket.code, error = %err, "lookup failed");
                self.state.alert = Some(Message::LookupFailed);
                Applied::Failed
            }
        }
    }

    /// Issues the ticket's request and applies the response.
    pub async fn run_lookup<C>(&mut self, client: &C, ticket: LookupTicket) -> Applied
    where
        C: LookupClient + ?Sized,
    {
        let result = client.lookup(ticket.code()).await;
        self.apply_lookup(&ticket, result)
    }

    /// Selection view back to the scanner, with an empty, focused field.
    pub fn back(&mut self) {
        // Invalidates any lookup still in flight.
        self.issued += 1;
        self.state.mode = ViewMode::Scanning;
        self.state.selection = None;
        self.state.alert = None;
        self.state.scan_field.clear();
        self.state.scan_field.focus();
    }
}
