//! Full-size image preload tracking.
//!
//! Opening the single view requests the full-size image and turns the
//! loading indicator on. The presenter performs the actual load and reports
//! back with the [`PreloadTicket`] it was given. Only the most recent request
//! counts: a ticket from an earlier request is stale, so it neither clears
//! the indicator for the image now showing nor raises a load error for an
//! image the viewer already left.

use serde::{Deserialize, Serialize};

/// Handle for one requested load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreloadTicket {
    pub generation: u64,
    pub index: usize,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

/// What a completed load means for the displayed image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreloadResolution {
    /// Current image loaded; indicator cleared.
    Loaded { index: usize },
    /// Current image failed; indicator cleared, error to report.
    Failed { index: usize, url: String },
    /// Superseded by a later request; ignored.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct PreloadTracker {
    generation: u64,
    in_flight: Option<PreloadTicket>,
}

impl PreloadTracker {
    /// Start loading `url` for `index`, superseding any earlier request.
    pub fn request(&mut self, index: usize, url: impl Into<String>) -> PreloadTicket {
        self.generation += 1;
        let ticket = PreloadTicket {
            generation: self.generation,
            index,
            url: url.into(),
        };
        self.in_flight = Some(ticket.clone());
        ticket
    }

    /// Whether the loading indicator should show.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<&PreloadTicket> {
        self.in_flight.as_ref()
    }

    pub fn complete(&mut self, ticket: &PreloadTicket, outcome: LoadOutcome) -> PreloadResolution {
        let current = self
            .in_flight
            .as_ref()
            .is_some_and(|pending| pending.generation == ticket.generation);
        if !current {
            tracing::debug!(
                index = ticket.index,
                generation = ticket.generation,
                "discarding stale preload"
            );
            return PreloadResolution::Stale;
        }

        self.in_flight = None;
        match outcome {
            LoadOutcome::Loaded => PreloadResolution::Loaded {
                index: ticket.index,
            },
            LoadOutcome::Failed => PreloadResolution::Failed {
                index: ticket.index,
                url: ticket.url.clone(),
            },
        }
    }

    /// Forget the in-flight request; any later completion is stale.
    pub fn reset(&mut self) {
        self.in_flight = None;
    }
}
