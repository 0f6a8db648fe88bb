//! Active navigation link resolution and scroll coalescing.
//!
//! Navigation state is never stored: each animation frame recomputes which
//! section contains `scrollY + offset` and which link points at it.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Measured vertical extent of one `.section` element.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    /// Half-open containment: `[top, top + height)`.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Position tested against section bounds.
pub fn probe_position(scroll_y: f64, offset: f64) -> f64 {
    scroll_y + offset
}

/// Id of the section containing `position`.
///
/// Sections are scanned in document order and the last match wins, so
/// overlapping sections resolve to the later one.
pub fn active_section(sections: &[SectionBounds], position: f64) -> Option<&str> {
    sections
        .iter()
        .rfind(|s| s.contains(position))
        .map(|s| s.id.as_str())
}

/// Whether a nav link `href` targets the section `id`.
pub fn href_targets(href: &str, id: &str) -> bool {
    href.strip_prefix('#').is_some_and(|rest| rest == id)
}

/// Indices of links to mark active for `active_id`; every other link is
/// cleared.
pub fn active_link_indices<'a, I>(hrefs: I, active_id: &str) -> Vec<usize>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .enumerate()
        .filter_map(|(i, href)| href.filter(|h| href_targets(h, active_id)).map(|_| i))
        .collect()
}

/// Coalesces scroll events to one update per animation frame.
///
/// The first event of a frame schedules a callback; later events in the same
/// frame are dropped until the callback runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` if the caller should request a new frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the scheduled frame as delivered.
    pub fn fire(&mut self) {
        self.pending = false;
    }

    /// Undo `request` when scheduling failed.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
