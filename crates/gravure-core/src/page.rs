//! Standard drawing sheet sizes.
//!
//! Dimensions are in mils, landscape by default. Backends use these to set
//! up their output page before replaying plot commands.

use crate::geometry::mm_to_mil;

/// A named page format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageInfo {
    pub page_type: &'static str,
    pub width: f64,
    pub height: f64,
    pub portrait: bool,
}

impl PageInfo {
    const fn new(page_type: &'static str, width: f64, height: f64) -> Self {
        Self {
            page_type,
            width,
            height,
            portrait: false,
        }
    }

    /// The catalogue of known page formats.
    pub fn page_types() -> &'static [PageInfo] {
        // constructed lazily because the metric sizes need a runtime
        // mm-to-mil conversion
        static TYPES: std::sync::OnceLock<Vec<PageInfo>> = std::sync::OnceLock::new();
        TYPES.get_or_init(|| {
            vec![
                PageInfo::new("A4", mm_to_mil(297.0), mm_to_mil(210.0)),
                PageInfo::new("A3", mm_to_mil(420.0), mm_to_mil(297.0)),
                PageInfo::new("A2", mm_to_mil(594.0), mm_to_mil(420.0)),
                PageInfo::new("A1", mm_to_mil(841.0), mm_to_mil(594.0)),
                PageInfo::new("A0", mm_to_mil(1189.0), mm_to_mil(841.0)),
                PageInfo::new("A", 11000.0, 8500.0),
                PageInfo::new("B", 17000.0, 11000.0),
                PageInfo::new("C", 22000.0, 17000.0),
                PageInfo::new("D", 34000.0, 22000.0),
                PageInfo::new("E", 44000.0, 34000.0),
                PageInfo::new("GERBER", 32000.0, 32000.0),
                PageInfo::new("User", 17000.0, 11000.0),
                PageInfo::new("USLetter", 11000.0, 8500.0),
                PageInfo::new("USLegal", 14000.0, 8500.0),
                PageInfo::new("USLedger", 17000.0, 11000.0),
            ]
        })
    }

    /// Looks up a page format by name.
    pub fn find(page_type: &str) -> Option<PageInfo> {
        let page = Self::page_types()
            .iter()
            .find(|page| page.page_type == page_type)
            .copied();
        if page.is_none() {
            log::debug!(page_type; "unknown page format");
        }
        page
    }

    /// Returns this page rotated into the requested orientation, swapping
    /// width and height when the orientation changes.
    pub fn with_portrait(self, portrait: bool) -> Self {
        if self.portrait == portrait {
            self
        } else {
            Self {
                width: self.height,
                height: self.width,
                portrait,
                ..self
            }
        }
    }
}
