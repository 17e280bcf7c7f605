//! Static panel catalog.
//!
//! Each panel is one career stage: an image under [`IMAGES_DIR`] plus the
//! metadata shown next to it in the modal. The catalog is compiled in and
//! never changes at runtime, so lookups by [`PanelId`] are total.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::fmt;

use crate::consts::{IMAGES_DIR, PANEL_COUNT};

/// A panel number in `1..=PANEL_COUNT`.
///
/// The only constructors clamp or reject out-of-range values, so every
/// `PanelId` in circulation indexes a real catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(u8);

impl PanelId {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(PANEL_COUNT);

    /// Wrap a raw panel number, or `None` when it is outside the catalog.
    #[must_use]
    pub fn new(raw: u8) -> Option<Self> {
        (1..=PANEL_COUNT).contains(&raw).then_some(Self(raw))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The following panel, or `None` at the last one.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0.saturating_add(1))
    }

    /// The preceding panel, or `None` at the first one.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        Self::new(self.0.saturating_sub(1))
    }

    /// Every panel id in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=PANEL_COUNT).map(Self)
    }

    fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl Default for PanelId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub skills: &'static [&'static str],
}

/// Look up a panel. Total over `PanelId`.
#[must_use]
pub fn panel(id: PanelId) -> &'static Panel {
    &PANELS[id.index()]
}

/// Image path for a panel, e.g. `images/panel3.png`.
#[must_use]
pub fn image_path(id: PanelId) -> String {
    format!("{IMAGES_DIR}/panel{id}.png")
}

/// Alt text for a panel image.
#[must_use]
pub fn image_alt(id: PanelId) -> String {
    format!("Comic Panel {id}")
}

/// Paths of every panel image, in display order. Used for preloading.
#[must_use]
pub fn image_paths() -> Vec<String> {
    PanelId::all().map(image_path).collect()
}

const PANELS: [Panel; PANEL_COUNT as usize] = [
    Panel {
        title: "Back-Office Beginnings (2012-2014)",
        company: "Siemens Healthineers",
        period: "2012-2014",
        description: "Starting career at Siemens Healthineers handling SAP systems, quotations, and customs clearance processes.",
        achievements: &[
            "Mastered SAP ERP system for daily operations",
            "Handled international customs procedures and documentation",
            "Prepared monthly reports analyzing customer complaints and tracking the status of open orders.",
            "Developed foundational skills in ERP systems and international trade",
        ],
        skills: &["SAP", "Excel", "Quotations", "Customs Procedures"],
    },
    Panel {
        title: "Customer Experience Champion (2014-2018)",
        company: "Tele2 Croatia",
        period: "2014-2018",
        description: "Testing mobile devices and managing service partners for optimal customer experience across major brands.",
        achievements: &[
            "Managed three major service partners",
            "Created after-sales tool connecting POS systems with service partners",
            "Improved NPS scores through systematic process optimization",
            "Handled complex edge cases during service processes and device testing",
        ],
        skills: &["Vendor Management", "Customer Service", "Software Testing", "Process Optimization"],
    },
    Panel {
        title: "Warehouse Builder (2018-2022)",
        company: "Telemach Hrvatska",
        period: "2018-2022",
        description: "Building internal warehouse operations from ground up and achieving significant error reduction in order processing.",
        achievements: &[
            "Successfully transfered products from 3PL warehouse to internal operations",
            "Built comprehensive internal warehouse operations from ground up",
            "Achieved 45% reduction in order mistakes through order process improvements",
            "Created Power BI dashboards and master Excel databases using Power Query",
        ],
        skills: &[
            "Power BI",
            "E-commerce",
            "Project Management",
            "Data Analytics",
            "Global Logistics",
            "International Trade",
        ],
    },
    Panel {
        title: "Team Builder Supreme (2023)",
        company: "Museum of Illusions",
        period: "2023",
        description: "Growing team from 2 to 8 professionals across multiple locations while establishing strong partnerships.",
        achievements: &[
            "Grew team from 2 to 8 professionals (400% growth)",
            "Established team operations across two strategic locations",
            "Built strong supplier partnerships and vendor relationships",
        ],
        skills: &["Team Leadership", "Strategic Planning", "Supplier Management"],
    },
    Panel {
        title: "Museum Network Commander (2023-2025)",
        company: "Museum of Illusions",
        period: "2023-2025",
        description: "Managing 24 global museum locations with massive inventory growth and risk reduction across three continents.",
        achievements: &[
            "Established new U.S. warehouse operations and managed 800% inventory growth within one year",
            "Managed 150+ tons of exhibits with precise logistics across 24 global locations on three continents",
            "Implemented 40% supplier risk reduction strategies across operations",
            "Coordinated complex supply chains across multiple time zones",
        ],
        skills: &["Global Logistics", "Risk Management", "Inventory Optimization", "Strategic Planning"],
    },
    Panel {
        title: "Multi-Industry AI Strategist (Future/Consulting)",
        company: "Coming soon...",
        period: "Future/Consulting",
        description: "Leveraging AI and experience to optimize processes across multiple industries and business sectors.",
        achievements: &[
            "Developing comprehensive AI integration strategies for various industries",
            "Cross-industry process optimization using AI",
            "Specialized app/website prototyping and deployment",
            "AI adoption consulting for leveling up your company",
        ],
        skills: &[
            "AI Integration",
            "Supply Chain Optimization",
            "Cross-Industry Consulting",
            "Strategic Innovation",
        ],
    },
];
