//! Slide-out settings panel controller
//!
//! Tracks whether the panel is open and dismisses it on a pointer press
//! outside its rendered area. The outside-press listener exists only while
//! the panel is open.

mod listeners;

use std::cell::Cell;
use std::rc::Rc;

use ratatui::layout::Rect;

pub use listeners::{DocumentListeners, ListenerGuard, PointerDown};

use crate::view::controls::rect_contains;

/// Messages the panel's document listener produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// A pointer press landed outside the open panel
    DismissOutside,
}

/// Shared handle to the panel's on-screen area
///
/// Rendering stores the area; it is `None` while the panel is not drawn.
#[derive(Debug, Clone, Default)]
pub struct PanelRef(Rc<Cell<Option<Rect>>>);

impl PanelRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, area: Rect) {
        self.0.set(Some(area));
    }

    pub fn clear(&self) {
        self.0.set(None);
    }

    pub fn get(&self) -> Option<Rect> {
        self.0.get()
    }

    /// Whether the point lies inside the mounted panel
    ///
    /// `None` when the panel is not mounted.
    pub fn contains(&self, column: u16, row: u16) -> Option<bool> {
        self.get().map(|area| rect_contains(area, column, row))
    }
}

/// Open/closed state of the settings panel
#[derive(Debug)]
pub struct PanelController {
    is_open: bool,
    panel_ref: PanelRef,
    listeners: DocumentListeners<PanelEvent>,
    outside_listener: Option<ListenerGuard<PanelEvent>>,
}

impl PanelController {
    /// Create a closed panel that registers with `listeners` while open
    pub fn new(listeners: &DocumentListeners<PanelEvent>) -> Self {
        Self {
            is_open: false,
            panel_ref: PanelRef::new(),
            listeners: listeners.clone(),
            outside_listener: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The ref rendering fills with the panel's area
    pub fn panel_ref(&self) -> &PanelRef {
        &self.panel_ref
    }

    /// Flip between open and closed; returns the new state
    pub fn toggle(&mut self) -> bool {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
        self.is_open
    }

    pub fn open(&mut self) {
        if self.is_open {
            return;
        }
        self.is_open = true;

        let panel_ref = self.panel_ref.clone();
        self.outside_listener = Some(self.listeners.add(move |event| {
            match panel_ref.contains(event.column, event.row) {
                Some(false) => Some(PanelEvent::DismissOutside),
                // Inside, or not mounted yet
                _ => None,
            }
        }));
        tracing::debug!("settings panel opened");
    }

    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        self.is_open = false;
        self.outside_listener = None;
        self.panel_ref.clear();
        tracing::debug!("settings panel closed");
    }

    /// React to a message produced by the document listener
    pub fn handle(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::DismissOutside => {
                tracing::debug!("pointer pressed outside the settings panel");
                self.close();
            }
        }
    }
}
