use super::example::Example;
use super::icon::Icon;
use super::{List, String};

#[derive(Debug, Clone)]
pub struct BusinessModel {
    pub id: u32,
    pub category: String,
    pub icon: Icon,
    pub description: String,
    pub examples: List<Example>,
    pub accessibility_features: List<String>,
    pub responsive_considerations: List<String>,
}

/// Model-level guidance lists, shown after the examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFacet {
    AccessibilityFeatures,
    ResponsiveConsiderations,
}

impl ModelFacet {
    pub const ALL: [Self; 2] = [Self::AccessibilityFeatures, Self::ResponsiveConsiderations];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::AccessibilityFeatures => "Accessibility Features (WCAG Compliance)",
            Self::ResponsiveConsiderations => "Responsive Design Considerations",
        }
    }

    #[must_use]
    pub const fn glyph_name(self) -> &'static str {
        match self {
            Self::AccessibilityFeatures => "view-reveal-symbolic",
            Self::ResponsiveConsiderations => "phone-symbolic",
        }
    }

    #[must_use]
    pub fn entries(self, model: &BusinessModel) -> &[String] {
        match self {
            Self::AccessibilityFeatures => &model.accessibility_features[..],
            Self::ResponsiveConsiderations => &model.responsive_considerations[..],
        }
    }
}
