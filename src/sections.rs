//! Page sections and the scroll tracking that decides which one is active.
//!
//! The scan itself never touches the DOM: callers hand in a lookup that
//! returns the live layout bounds of a section, or `None` when its element
//! isn't mounted yet.

use std::rc::Rc;

use yew::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Hero,
    About,
    Services,
    Contact,
}

impl Section {
    /// Declared page order, top to bottom. The scan walks this order.
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Services,
        Section::Contact,
    ];

    /// Element id of the `<section>` rendering this region.
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About Us",
            Section::Services => "Services",
            Section::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// `offsetTop` / `offsetHeight` of a rendered section, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SectionBounds {
    pub fn new(offset_top: f64, offset_height: f64) -> Self {
        Self { offset_top, offset_height }
    }

    /// Half-open: the top edge belongs to this section, the bottom edge to the next.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.offset_height
    }
}

pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > config::SCROLL_TOP_THRESHOLD
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAVBAR_SCROLLED_THRESHOLD
}

/// First section, in page order, whose bounds contain `scroll_y` plus the
/// navbar look-ahead. Unmounted sections are skipped.
pub fn section_at<F>(scroll_y: f64, mut bounds_of: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    let position = scroll_y + config::SECTION_LOOKAHEAD;
    Section::ALL
        .into_iter()
        .find(|section| bounds_of(*section).map_or(false, |b| b.contains(position)))
}

/// One scroll event: the raw offset plus the section found under the
/// reference point, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollSample {
    pub scroll_y: f64,
    pub hit: Option<Section>,
}

impl ScrollSample {
    pub fn take<F>(scroll_y: f64, bounds_of: F) -> Self
    where
        F: FnMut(Section) -> Option<SectionBounds>,
    {
        Self { scroll_y, hit: section_at(scroll_y, bounds_of) }
    }
}

/// Scroll-derived state owned by the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTracker {
    pub active: Section,
    pub show_scroll_top: bool,
}

impl ScrollTracker {
    /// Applies one sample. Returns whether anything observable changed.
    ///
    /// A sample without a hit keeps the previous active section.
    pub fn apply(&mut self, sample: ScrollSample) -> bool {
        let before = *self;
        self.show_scroll_top = show_scroll_top(sample.scroll_y);
        if let Some(section) = sample.hit {
            self.active = section;
        }
        before != *self
    }
}

impl Reducible for ScrollTracker {
    type Action = ScrollSample;

    fn reduce(self: Rc<Self>, sample: Self::Action) -> Rc<Self> {
        let mut next = *self;
        if next.apply(sample) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl ScrollTracker {
        fn observe<F>(&mut self, scroll_y: f64, bounds_of: F) -> bool
        where
            F: FnMut(Section) -> Option<SectionBounds>,
        {
            self.apply(ScrollSample::take(scroll_y, bounds_of))
        }
    }

    fn page_layout(section: Section) -> Option<SectionBounds> {
        Some(match section {
            Section::Hero => SectionBounds::new(0.0, 800.0),
            Section::About => SectionBounds::new(800.0, 800.0),
            Section::Services => SectionBounds::new(1600.0, 800.0),
            Section::Contact => SectionBounds::new(2400.0, 800.0),
        })
    }

    #[test]
    fn lookahead_moves_highlight_before_section_reaches_top() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(750.0, page_layout);
        assert_eq!(tracker.active, Section::About);
        assert!(tracker.show_scroll_top);
    }

    #[test]
    fn every_offset_inside_a_section_selects_it() {
        for section in Section::ALL {
            let bounds = page_layout(section).unwrap();
            let mut position = bounds.offset_top;
            while position < bounds.offset_top + bounds.offset_height {
                let mut tracker = ScrollTracker::default();
                tracker.observe(position - config::SECTION_LOOKAHEAD, page_layout);
                assert_eq!(tracker.active, section, "position {}", position);
                position += 37.0;
            }
        }
    }

    #[test]
    fn section_boundary_belongs_to_the_lower_section() {
        assert_eq!(section_at(700.0, page_layout), Some(Section::About));
        assert_eq!(section_at(699.0, page_layout), Some(Section::Hero));
    }

    #[test]
    fn scroll_top_flag_is_strictly_above_threshold() {
        assert!(!show_scroll_top(0.0));
        assert!(!show_scroll_top(500.0));
        assert!(show_scroll_top(500.5));
        assert!(show_scroll_top(2_000.0));
    }

    #[test]
    fn navbar_scrolled_threshold() {
        assert!(!navbar_scrolled(10.0));
        assert!(navbar_scrolled(11.0));
    }

    #[test]
    fn gap_below_last_section_keeps_previous_active() {
        let mut tracker = ScrollTracker::default();
        tracker.observe(2_500.0, page_layout);
        assert_eq!(tracker.active, Section::Contact);

        // Footer area, past every section.
        tracker.observe(3_500.0, page_layout);
        assert_eq!(tracker.active, Section::Contact);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let partial = |section: Section| match section {
            Section::About => None,
            other => page_layout(other),
        };
        let mut tracker = ScrollTracker::default();
        tracker.observe(900.0, partial);
        assert_eq!(tracker.active, Section::Hero);

        tracker.observe(1_700.0, partial);
        assert_eq!(tracker.active, Section::Services);
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let overlapping = |section: Section| match section {
            Section::Hero => Some(SectionBounds::new(0.0, 1_000.0)),
            Section::About => Some(SectionBounds::new(500.0, 1_000.0)),
            _ => None,
        };
        assert_eq!(section_at(600.0, overlapping), Some(Section::Hero));
    }

    #[test]
    fn observe_reports_changes_only() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.observe(0.0, page_layout));
        assert!(!tracker.observe(200.0, page_layout));
        assert!(tracker.observe(850.0, page_layout));
        assert!(!tracker.observe(860.0, page_layout));
    }

    #[test]
    fn reducer_keeps_same_state_when_nothing_changes() {
        let state = Rc::new(ScrollTracker::default());
        let same = state.clone().reduce(ScrollSample { scroll_y: 40.0, hit: Some(Section::Hero) });
        assert!(Rc::ptr_eq(&state, &same));

        let moved = state.reduce(ScrollSample { scroll_y: 900.0, hit: Some(Section::About) });
        assert_eq!(moved.active, Section::About);
        assert!(moved.show_scroll_top);
    }

    #[test]
    fn ids_round_trip_in_page_order() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["hero", "about", "services", "contact"]);
        assert_eq!(Section::from_id("services"), Some(Section::Services));
        assert_eq!(Section::from_id("footer"), None);
    }
}
