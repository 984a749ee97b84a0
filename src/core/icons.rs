//! Glyph names shipped in `public/icons`

pub const ZAP: &str = "zap";
pub const MENU: &str = "menu";
pub const X: &str = "x";
pub const CHEVRON_RIGHT: &str = "chevron-right";
pub const STAR: &str = "star";
pub const USERS: &str = "users";
pub const BAR_CHART_2: &str = "bar-chart-2";
pub const MESSAGE_SQUARE: &str = "message-square";
pub const CHECK: &str = "check";

pub const ALL: [&str; 9] = [
    ZAP,
    MENU,
    X,
    CHEVRON_RIGHT,
    STAR,
    USERS,
    BAR_CHART_2,
    MESSAGE_SQUARE,
    CHECK,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FEATURES, MenuState};

    #[test]
    fn test_names_are_unique() {
        for (i, a) in ALL.iter().enumerate() {
            for b in &ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_content_icons_are_known() {
        for feature in FEATURES {
            assert!(ALL.contains(&feature.icon), "unknown icon {}", feature.icon);
        }
        assert!(ALL.contains(&MenuState::Closed.toggle_icon()));
        assert!(ALL.contains(&MenuState::Open.toggle_icon()));
    }
}
