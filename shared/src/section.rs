//! Sub-navigation sections and the scroll-driven active-section tracker.

use serde::{Deserialize, Serialize};

/// Height reserved for the sticky navigation bars, measured from the top of
/// the viewport.
pub const NAV_OFFSET: f64 = 200.0;
/// Distance from the document bottom at which the last section wins.
pub const BOTTOM_THRESHOLD: f64 = 50.0;
/// Minimum visible overlap for a section to count as a candidate.
pub const MIN_OVERLAP: f64 = 100.0;
/// Gap left above a section when scrolling to it from the navigation.
pub const SCROLL_MARGIN: f64 = 80.0;

/// A named, anchorable region of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollState {
    fn near_bottom(&self) -> bool {
        self.scroll_y + self.viewport_height >= self.document_height - BOTTOM_THRESHOLD
    }

    fn offset_line(&self) -> f64 {
        self.scroll_y + NAV_OFFSET
    }

    fn window_end(&self) -> f64 {
        self.scroll_y + self.viewport_height
    }
}

/// A section measured in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.into(),
            top,
            bottom,
        }
    }

    fn overlap(&self, start: f64, end: f64) -> f64 {
        (self.bottom.min(end) - self.top.max(start)).max(0.0)
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }
}

/// Picks the section that occupies the viewport just below the navigation
/// bars. `bounds` must be in page order.
pub fn active_section(bounds: &[SectionBounds], scroll: ScrollState) -> Option<&str> {
    let last = bounds.last()?;
    if scroll.near_bottom() {
        return Some(&last.id);
    }

    let line = scroll.offset_line();
    let window_end = scroll.window_end();

    let mut best: Option<(&SectionBounds, f64)> = None;
    for section in bounds {
        let overlap = section.overlap(line, window_end);
        if overlap <= MIN_OVERLAP && !section.contains(line) {
            continue;
        }
        // Strictly greater keeps the earlier section on ties.
        if best.is_none_or(|(_, best_overlap)| overlap > best_overlap) {
            best = Some((section, overlap));
        }
    }
    if let Some((section, _)) = best {
        return Some(&section.id);
    }

    if line >= last.bottom {
        return Some(&last.id);
    }

    bounds
        .iter()
        .min_by(|a, b| (line - a.top).abs().total_cmp(&(line - b.top).abs()))
        .map(|section| section.id.as_str())
}

/// Document offset to scroll to when a navigation entry is clicked.
pub fn scroll_target(section_top: f64) -> f64 {
    (section_top - SCROLL_MARGIN).max(0.0)
}

/// Owns the ordered section list of one page view and its active id.
#[derive(Debug, Clone, Default)]
pub struct SectionTracker {
    sections: Vec<Section>,
    active: Option<String>,
}

impl SectionTracker {
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            sections,
            active: None,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Swaps in a relabelled section list, keeping the active id when it
    /// still names a section.
    pub fn replace_sections(&mut self, sections: Vec<Section>) {
        if let Some(active) = &self.active
            && !sections.iter().any(|s| &s.id == active)
        {
            self.active = None;
        }
        self.sections = sections;
    }

    /// Measures every section through `locate`, which returns the
    /// `(top, bottom)` of an anchor in document coordinates. Sections whose
    /// anchor is missing from the page are skipped.
    pub fn measure<F>(&self, mut locate: F) -> Vec<SectionBounds>
    where
        F: FnMut(&str) -> Option<(f64, f64)>,
    {
        self.sections
            .iter()
            .filter_map(|section| {
                let (top, bottom) = locate(&section.id)?;
                Some(SectionBounds::new(section.id.clone(), top, bottom))
            })
            .collect()
    }

    /// Recomputes the active id. Returns true when it changed.
    pub fn recompute(&mut self, bounds: &[SectionBounds], scroll: ScrollState) -> bool {
        if self.sections.is_empty() {
            return false;
        }
        let Some(next) = active_section(bounds, scroll) else {
            return false;
        };
        if self.active.as_deref() == Some(next) {
            return false;
        }
        self.active = Some(next.to_string());
        true
    }
}
