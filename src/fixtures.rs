use crate::models::{BusinessModel, Example, Icon};

pub static SCENARIO: &[BusinessModel] = &[
    BusinessModel {
        id: 1,
        category: "E-commerce",
        icon: Icon::ShoppingCart,
        description: "Sell goods online",
        examples: &[
            Example {
                name: "Fashion Store",
                description: "Apparel storefront with seasonal collections",
                ui_considerations: &["Large product imagery", "Visible size guide"],
                key_features: &["Wishlist", "Size filters"],
                user_flow: &["Browse collection", "Add to cart", "Checkout"],
                interactive_elements: &["Quick view modal"],
                design_patterns: &["Product card grid"],
            },
        ],
        accessibility_features: &["Alt text on product photos"],
        responsive_considerations: &["Sticky mobile cart button"],
    },
    BusinessModel {
        id: 2,
        category: "SaaS",
        icon: Icon::Cloud,
        description: "Subscription software",
        examples: &[
            Example {
                name: "Project Tracker",
                description: "Team task boards",
                ui_considerations: &["Dense dashboard layout"],
                key_features: &["Kanban boards"],
                user_flow: &["Start trial", "Invite team"],
                interactive_elements: &["Drag and drop cards"],
                design_patterns: &["Pricing table"],
            },
        ],
        accessibility_features: &["Keyboard shortcuts for every action"],
        responsive_considerations: &["Collapsible navigation rail"],
    },
    BusinessModel {
        id: 3,
        category: "Marketplace",
        icon: Icon::Store,
        description: "Connect buyers and sellers",
        examples: &[],
        accessibility_features: &[],
        responsive_considerations: &[],
    },
];

pub static DUPLICATED: &[BusinessModel] = &[
    BusinessModel {
        id: 10,
        category: "SaaS",
        icon: Icon::Cloud,
        description: "Hosted analytics",
        examples: &[],
        accessibility_features: &[],
        responsive_considerations: &[],
    },
    BusinessModel {
        id: 11,
        category: "Marketplace",
        icon: Icon::Store,
        description: "Handmade goods exchange",
        examples: &[],
        accessibility_features: &[],
        responsive_considerations: &[],
    },
    BusinessModel {
        id: 12,
        category: "SaaS",
        icon: Icon::Code,
        description: "Developer tooling",
        examples: &[],
        accessibility_features: &[],
        responsive_considerations: &[],
    },
];
