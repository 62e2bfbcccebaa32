use thiserror::Error;

use crate::shared::constants::PREVIEW_PAGE_LIMIT;

/// What kind of preview a document gets, derived from its mime type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewKind {
    /// Rendered page by page, up to the gate
    Pdf,
    /// Single bounded region with the gate overlaid on the lower portion
    Image,
    /// No partial content; only the unlock action is offered
    Other,
}

impl PreviewKind {
    pub fn from_mime(mime_type: &str) -> Self {
        if mime_type.contains("pdf") {
            PreviewKind::Pdf
        } else if mime_type.starts_with("image/") {
            PreviewKind::Image
        } else {
            PreviewKind::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PreviewKind::Pdf => "pdf",
            PreviewKind::Image => "image",
            PreviewKind::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Initial; payload being fetched
    Loading,
    /// Rendering pages in order; `next_page` is the page that must render next
    Rendering { next_page: u32 },
    /// Partial content shown, unlock action exposed
    Gated,
    /// Unlock fired; full access granted
    Unlocked,
    /// Document failed to load or parse; terminal, distinct from Gated
    Failed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GateError {
    #[error("page {got} rendered out of order, expected page {expected}")]
    OutOfOrder { expected: u32, got: u32 },

    #[error("invalid transition from {state:?}")]
    InvalidTransition { state: GateState },

    #[error("preview already unlocked")]
    AlreadyUnlocked,
}

/// Per-session preview gate.
///
/// `Loading -> Rendering(1) -> ... -> Gated -> Unlocked`, with `Failed` as
/// the terminal error state. Page i+1 never starts before page i completes,
/// because the gate overlay is positioned relative to the last rendered
/// page. State is never persisted; reopening the viewer builds a fresh gate.
#[derive(Debug)]
pub struct PreviewGate {
    kind: PreviewKind,
    total_pages: u32,
    state: GateState,
}

// The transition methods are driven by the rendering session (and the unit
// tests); the plan endpoint only needs the derived page bounds.
#[allow(dead_code)]
impl PreviewGate {
    pub fn new(kind: PreviewKind, total_pages: u32) -> Self {
        Self {
            kind,
            total_pages,
            state: GateState::Loading,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Number of pages rendered before the gate
    pub fn planned_pages(&self) -> u32 {
        match self.kind {
            PreviewKind::Pdf => self.total_pages.min(PREVIEW_PAGE_LIMIT),
            PreviewKind::Image => 1,
            PreviewKind::Other => 0,
        }
    }

    /// The page the gate overlays: the last planned one
    pub fn gate_page(&self) -> Option<u32> {
        match self.planned_pages() {
            0 => None,
            n => Some(n),
        }
    }

    /// Payload fetched. Non-previewable documents (or empty ones) skip
    /// rendering and go straight to the gate.
    pub fn loaded(&mut self) -> Result<(), GateError> {
        if self.state != GateState::Loading {
            return Err(GateError::InvalidTransition { state: self.state });
        }
        self.state = if self.planned_pages() == 0 {
            GateState::Gated
        } else {
            GateState::Rendering { next_page: 1 }
        };
        Ok(())
    }

    /// Page `page` finished rendering. Pages must complete strictly in
    /// order; finishing the last planned page drops the gate.
    pub fn page_rendered(&mut self, page: u32) -> Result<(), GateError> {
        let expected = match self.state {
            GateState::Rendering { next_page } => next_page,
            state => return Err(GateError::InvalidTransition { state }),
        };
        if page != expected {
            return Err(GateError::OutOfOrder {
                expected,
                got: page,
            });
        }
        self.state = if page == self.planned_pages() {
            GateState::Gated
        } else {
            GateState::Rendering {
                next_page: page + 1,
            }
        };
        Ok(())
    }

    /// The explicit user action. Fires exactly once per session.
    pub fn unlock(&mut self) -> Result<(), GateError> {
        match self.state {
            GateState::Gated => {
                self.state = GateState::Unlocked;
                Ok(())
            }
            GateState::Unlocked => Err(GateError::AlreadyUnlocked),
            state => Err(GateError::InvalidTransition { state }),
        }
    }

    /// Load/parse failure. Terminal unless the gate was already unlocked.
    pub fn fail(&mut self) {
        if self.state != GateState::Unlocked {
            self.state = GateState::Failed;
        }
    }
}
