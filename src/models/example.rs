use super::{List, String};

#[derive(Debug, Clone)]
pub struct Example {
    pub name: String,
    pub description: String,
    pub ui_considerations: List<String>,
    pub key_features: List<String>,
    pub user_flow: List<String>,
    pub interactive_elements: List<String>,
    pub design_patterns: List<String>,
}

/// One named list of guidance strings on an [`Example`].
///
/// [`ExampleFacet::ALL`] is the order in which facets are searched and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleFacet {
    UiConsiderations,
    KeyFeatures,
    UserFlow,
    InteractiveElements,
    DesignPatterns,
}

impl ExampleFacet {
    pub const ALL: [Self; 5] = [
        Self::UiConsiderations,
        Self::KeyFeatures,
        Self::UserFlow,
        Self::InteractiveElements,
        Self::DesignPatterns,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::UiConsiderations => "UI/UX Considerations",
            Self::KeyFeatures => "Key Features",
            Self::UserFlow => "User Flow",
            Self::InteractiveElements => "Interactive Elements",
            Self::DesignPatterns => "Design Patterns",
        }
    }

    #[must_use]
    pub const fn glyph_name(self) -> &'static str {
        match self {
            Self::UiConsiderations => "view-grid-symbolic",
            Self::KeyFeatures => "starred-symbolic",
            Self::UserFlow => "media-playlist-consecutive-symbolic",
            Self::InteractiveElements => "input-mouse-symbolic",
            Self::DesignPatterns => "applications-graphics-symbolic",
        }
    }

    #[must_use]
    pub fn entries(self, example: &Example) -> &[String] {
        match self {
            Self::UiConsiderations => &example.ui_considerations[..],
            Self::KeyFeatures => &example.key_features[..],
            Self::UserFlow => &example.user_flow[..],
            Self::InteractiveElements => &example.interactive_elements[..],
            Self::DesignPatterns => &example.design_patterns[..],
        }
    }
}
