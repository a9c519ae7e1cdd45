//! Render slots that keep only the newest completed render.
//!
//! The editor keeps two bitmaps, the fixed-size preview and the export
//! preview. Renders may run anywhere, on a worker thread or inline, and
//! finish in any order. Each request carries a ticket from its slot; a
//! finished render is stored only if its ticket is newer than the one
//! already stored, so an old render can never replace a newer one.

use crate::error::Result;
use crate::raster::{Bitmap, Rasterizer};

/// Which bitmap a render belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Preview,
    Export,
}

/// A render job detached from the editor.
///
/// Owns everything it needs, so it can be moved to another thread.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub slot: SlotKind,
    ticket: u64,
    svg: String,
    size: u32,
    high_resolution: bool,
    rasterizer: Rasterizer,
}

impl RenderRequest {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Executes the render.
    pub fn run(self) -> RenderOutcome {
        let result = self
            .rasterizer
            .render(&self.svg, self.size, self.high_resolution);
        RenderOutcome {
            slot: self.slot,
            ticket: self.ticket,
            result,
        }
    }
}

/// A finished render, ready to hand back to the editor.
#[derive(Debug)]
pub struct RenderOutcome {
    pub slot: SlotKind,
    pub ticket: u64,
    pub result: Result<Bitmap>,
}

/// Latest-wins storage for one bitmap.
#[derive(Debug, Default)]
pub struct RenderSlot {
    issued: u64,
    stored: u64,
    bitmap: Option<Bitmap>,
}

impl RenderSlot {
    /// Issues a request for `svg`, newer than every earlier one.
    pub fn request(
        &mut self,
        slot: SlotKind,
        svg: &str,
        size: u32,
        high_resolution: bool,
        rasterizer: Rasterizer,
    ) -> RenderRequest {
        self.issued = self.issued.wrapping_add(1);
        RenderRequest {
            slot,
            ticket: self.issued,
            svg: svg.to_string(),
            size,
            high_resolution,
            rasterizer,
        }
    }

    /// Stores a finished render unless something newer is already stored.
    ///
    /// A failed render clears the bitmap. Returns whether the outcome was
    /// accepted.
    pub fn complete(&mut self, ticket: u64, result: Result<Bitmap>) -> bool {
        if ticket <= self.stored || ticket > self.issued {
            log::debug!(
                "dropping stale render (ticket {ticket}, stored {})",
                self.stored
            );
            return false;
        }

        self.stored = ticket;
        self.bitmap = match result {
            Ok(bitmap) => Some(bitmap),
            Err(err) => {
                log::warn!("render failed, no image: {err}");
                None
            }
        };
        true
    }

    /// Drops the bitmap and makes every outstanding request stale.
    pub fn clear(&mut self) {
        self.stored = self.issued;
        self.bitmap = None;
    }

    pub fn bitmap(&self) -> Option<&Bitmap> {
        self.bitmap.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#00ff00"/></svg>"##;

    fn request(slot: &mut RenderSlot, size: u32) -> RenderRequest {
        slot.request(SlotKind::Preview, SQUARE, size, false, Rasterizer::default())
    }

    #[test]
    fn tickets_increase() {
        let mut slot = RenderSlot::default();
        let a = request(&mut slot, 4);
        let b = request(&mut slot, 4);
        assert!(b.ticket() > a.ticket());
    }

    #[test]
    fn in_order_completion() {
        let mut slot = RenderSlot::default();
        let first = request(&mut slot, 4).run();
        assert!(slot.complete(first.ticket, first.result));
        assert_eq!(slot.bitmap().unwrap().pixel_size(), 4);

        let second = request(&mut slot, 6).run();
        assert!(slot.complete(second.ticket, second.result));
        assert_eq!(slot.bitmap().unwrap().pixel_size(), 6);
    }

    #[test]
    fn stale_completion_is_dropped() {
        let mut slot = RenderSlot::default();
        let old = request(&mut slot, 4);
        let new = request(&mut slot, 8);

        let new = new.run();
        assert!(slot.complete(new.ticket, new.result));

        let old = old.run();
        assert!(!slot.complete(old.ticket, old.result));
        assert_eq!(slot.bitmap().unwrap().pixel_size(), 8);
    }

    #[test]
    fn failure_clears_bitmap() {
        let mut slot = RenderSlot::default();
        let ok = request(&mut slot, 4).run();
        slot.complete(ok.ticket, ok.result);
        assert!(slot.bitmap().is_some());

        let failing = slot.request(SlotKind::Preview, "not svg", 4, false, Rasterizer::default());
        let outcome = failing.run();
        assert!(matches!(outcome.result, Err(Error::Decode(_))));
        assert!(slot.complete(outcome.ticket, outcome.result));
        assert!(slot.bitmap().is_none());
    }

    #[test]
    fn clear_invalidates_outstanding() {
        let mut slot = RenderSlot::default();
        let pending = request(&mut slot, 4);
        slot.clear();

        let outcome = pending.run();
        assert!(!slot.complete(outcome.ticket, outcome.result));
        assert!(slot.bitmap().is_none());
    }

    #[test]
    fn unknown_ticket_rejected() {
        let mut slot = RenderSlot::default();
        let outcome = request(&mut slot, 4).run();
        assert!(!slot.complete(outcome.ticket + 5, outcome.result));
    }

    #[test]
    fn requests_run_on_other_threads() {
        let mut slot = RenderSlot::default();
        let requests: Vec<_> = (1..=4).map(|n| request(&mut slot, n * 2)).collect();

        let outcomes: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = requests
                .into_iter()
                .rev()
                .map(|req| scope.spawn(move || req.run()))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        // completions arrive newest first, so only the first one sticks
        let accepted: Vec<bool> = outcomes
            .into_iter()
            .map(|o| slot.complete(o.ticket, o.result))
            .collect();
        assert_eq!(accepted, [true, false, false, false]);
        assert_eq!(slot.bitmap().unwrap().pixel_size(), 8);
    }
}
