#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    WebApps,
    Mobile,
    Desktop,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::WebApps,
        ProjectFilter::Mobile,
        ProjectFilter::Desktop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::WebApps => "Web Apps",
            ProjectFilter::Mobile => "Mobile",
            ProjectFilter::Desktop => "Desktop",
        }
    }

    /// Lowercased label, compared against a card's `data-category`.
    pub fn category(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::WebApps => "web apps",
            ProjectFilter::Mobile => "mobile",
            ProjectFilter::Desktop => "desktop",
        }
    }

    /// Cards without a category are always shown.
    pub fn matches(self, category: Option<&str>) -> bool {
        match (self, category) {
            (ProjectFilter::All, _) | (_, None) => true,
            (f, Some(c)) => c.trim().eq_ignore_ascii_case(f.category()),
        }
    }
}
