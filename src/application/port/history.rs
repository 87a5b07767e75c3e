// SPDX-License-Identifier: MPL-2.0
//! Navigation history port.
//!
//! The lightbox closes on a platform back gesture by pushing one marker
//! entry when it opens and treating the next back-navigation as "close".
//! Hosts expose their back/forward stack through [`NavigationStack`]; a host
//! without one uses [`NoHistory`].

/// Tag carried by a synthetic history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMarker {
    /// Entry pushed when a modal viewer opened.
    ModalOpen,
}

/// A navigable back/forward stack owned by the host.
pub trait NavigationStack {
    /// Pushes a synthetic entry tagged with `marker`.
    ///
    /// Returns `false` when the host cannot record entries, in which case
    /// no back-navigation will ever be reported for it.
    fn push_marker(&mut self, marker: HistoryMarker) -> bool;
}

/// Host without a navigable stack.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHistory;

impl NavigationStack for NoHistory {
    fn push_marker(&mut self, _marker: HistoryMarker) -> bool {
        false
    }
}

/// Stack that only records pushed markers. Useful for hosts that forward
/// markers elsewhere and for tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingHistory {
    pub markers: Vec<HistoryMarker>,
}

impl NavigationStack for RecordingHistory {
    fn push_marker(&mut self, marker: HistoryMarker) -> bool {
        self.markers.push(marker);
        true
    }
}
