//! Static landing page content
//!
//! Everything the page shows lives here as compile-time constants so the
//! view layer only iterates and renders.

use super::icons;

/// Product name shown in the navigation bar
pub const BRAND_NAME: &str = "AiME";

/// Text typed out by the hero headline
pub const HERO_HEADLINE: &str = "Transform Your Vision Into Reality";

pub const HERO_SUBHEADING: &str =
    "Create stunning digital experiences with our modern design tools and components";

/// Document title and meta description
pub const PAGE_TITLE: &str = "AiME - Transform Your Vision Into Reality";
pub const PAGE_DESCRIPTION: &str = HERO_SUBHEADING;

/// In-page anchors linked from the navigation bar, in display order.
///
/// `#about` is linked but has no section of its own.
pub const NAV_LINKS: [NavLink; 3] = [
    NavLink {
        label: "Features",
        href: "#features",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Pricing",
        href: "#pricing",
    },
];

/// A navigation anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// A card in the features grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    /// Icon name, see [`icons`]
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: icons::USERS,
        title: "Team Collaboration",
        description: "Work together seamlessly with your team in real-time",
    },
    Feature {
        icon: icons::BAR_CHART_2,
        title: "Analytics",
        description: "Get detailed insights about your projects and performance",
    },
    Feature {
        icon: icons::MESSAGE_SQUARE,
        title: "Communication",
        description: "Stay connected with integrated messaging and notifications",
    },
    Feature {
        icon: icons::STAR,
        title: "Premium Support",
        description: "24/7 support to help you with any questions or issues",
    },
];

/// Visual treatment of a pricing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierStyle {
    /// Subtle glass card with a gradient button
    #[default]
    Standard,
    /// Gradient card, scaled up on large screens, white button
    Highlighted,
}

/// One pricing tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub benefits: &'static [&'static str],
    pub cta_label: &'static str,
    pub style: TierStyle,
}

impl PricingTier {
    pub fn is_highlighted(&self) -> bool {
        self.style == TierStyle::Highlighted
    }
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Starter",
        price: "$50",
        period: "/month",
        benefits: &[
            "7,500 messages per year",
            "50 account warmups",
            "10 AI profiles",
        ],
        cta_label: "Get Started",
        style: TierStyle::Standard,
    },
    PricingTier {
        name: "Professional",
        price: "$200",
        period: "/month",
        benefits: &[
            "40,000 messages per year",
            "200 account warmups",
            "40 AI profiles",
        ],
        cta_label: "Get Started",
        style: TierStyle::Highlighted,
    },
    PricingTier {
        name: "Enterprise",
        price: "$5,000",
        period: "/month",
        benefits: &[
            "1.2M messages per year",
            "5,000 account warmups",
            "Unlimited AI profiles",
            "Custom specifications available",
        ],
        cta_label: "Contact Sales",
        style: TierStyle::Standard,
    },
];

pub const ADD_ON_TITLE: &str = "Need More?";

pub const ADD_ON_NOTE: &str =
    "Additional package: $75 for 5,000 messages, 10 account warmups, and 10 AI profiles";

/// Closing banner copy
pub struct CallToAction {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub button: &'static str,
}

pub const CLOSING_CTA: CallToAction = CallToAction {
    title: "Ready to Get Started?",
    subtitle: "Join thousands of users creating amazing experiences",
    button: "Start Your Journey",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_fixed_order() {
        let titles: Vec<_> = FEATURES.iter().map(|f| f.title).collect();
        assert_eq!(
            titles,
            vec![
                "Team Collaboration",
                "Analytics",
                "Communication",
                "Premium Support"
            ]
        );
    }

    #[test]
    fn test_feature_icons() {
        assert_eq!(FEATURES[0].icon, "users");
        assert_eq!(FEATURES[1].icon, "bar-chart-2");
        assert_eq!(FEATURES[2].icon, "message-square");
        assert_eq!(FEATURES[3].icon, "star");
    }

    #[test]
    fn test_pricing_tiers_fixed_order() {
        let summary: Vec<_> = PRICING_TIERS
            .iter()
            .map(|t| (t.name, t.price, t.benefits.len()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Starter", "$50", 3),
                ("Professional", "$200", 3),
                ("Enterprise", "$5,000", 4),
            ]
        );
        assert!(PRICING_TIERS.iter().all(|t| t.period == "/month"));
    }

    #[test]
    fn test_only_professional_is_highlighted() {
        let highlighted: Vec<_> = PRICING_TIERS
            .iter()
            .filter(|t| t.is_highlighted())
            .map(|t| t.name)
            .collect();
        assert_eq!(highlighted, vec!["Professional"]);
    }

    #[test]
    fn test_enterprise_contacts_sales() {
        assert_eq!(PRICING_TIERS[2].cta_label, "Contact Sales");
        assert_eq!(PRICING_TIERS[0].cta_label, "Get Started");
    }

    #[test]
    fn test_nav_links_point_at_anchors() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, vec!["#features", "#about", "#pricing"]);
    }

    #[test]
    fn test_no_empty_benefit_lists() {
        for tier in PRICING_TIERS {
            assert!(!tier.benefits.is_empty(), "{} has no benefits", tier.name);
            assert!(tier.benefits.iter().all(|b| !b.is_empty()));
        }
    }
}
