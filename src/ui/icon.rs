use leptos::prelude::*;

pub use crate::core::icons;

/// SVG glyph served from `/icons/{name}.svg`
///
/// The SVG is applied as a mask over `currentColor`, so text color classes
/// tint it.
#[component]
pub fn Icon(
    /// Icon name without the `.svg` extension, see [`icons`]
    name: &'static str,
    /// CSS classes for sizing and color
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span
            class=format!("icon-mask {}", class)
            style=icon_mask_style(name)
            data-icon=name
            aria-hidden="true"
        ></span>
    }
}

pub fn icon_path(name: &str) -> String {
    format!("/icons/{}.svg", name)
}

fn icon_mask_style(name: &str) -> String {
    let url = icon_path(name);
    format!("-webkit-mask-image: url({url}); mask-image: url({url});")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_path() {
        assert_eq!(icon_path(icons::ZAP), "/icons/zap.svg");
        assert_eq!(icon_path(icons::BAR_CHART_2), "/icons/bar-chart-2.svg");
    }

    #[test]
    fn test_mask_style_references_asset() {
        let style = icon_mask_style(icons::CHECK);
        assert!(style.contains("-webkit-mask-image: url(/icons/check.svg);"));
        assert!(style.contains(" mask-image: url(/icons/check.svg);"));
    }

    #[test]
    fn test_every_icon_has_an_asset() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        for name in icons::ALL {
            let file = dir.join(format!("{}.svg", name));
            assert!(file.exists(), "missing asset {}", file.display());
        }
    }
}
