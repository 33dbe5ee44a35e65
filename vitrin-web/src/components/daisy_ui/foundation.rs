pub use yew::classes;
pub use yew::function_component;
pub use yew::prelude::{AttrValue, Callback, Children, Classes, Html, Properties, html};
pub use yew::{use_effect_with, use_state};

/// Colour roles used by the storefront's badges and progress bars.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum DaisyColor {
    #[default]
    Neutral,
    Primary,
    Accent,
    Success,
    Error,
}

impl DaisyColor {
    const fn suffix(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Accent => "accent",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    #[must_use]
    pub fn class(self, prefix: &str) -> String {
        format!("{prefix}-{}", self.suffix())
    }
}

#[must_use]
pub fn class_list(base: &[&'static str], extra: &Classes) -> Classes {
    let mut classes = Classes::new();
    for item in base {
        classes.push(*item);
    }
    classes.push(extra.clone());
    classes
}

/// `"true"` / `"false"` for ARIA attributes.
#[must_use]
pub const fn aria_bool(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::{DaisyColor, aria_bool, class_list};
    use yew::Classes;

    #[test]
    fn daisy_color_classes_include_prefix_and_suffix() {
        for color in [
            DaisyColor::Neutral,
            DaisyColor::Primary,
            DaisyColor::Accent,
            DaisyColor::Success,
            DaisyColor::Error,
        ] {
            assert!(color.class("badge").starts_with("badge-"));
        }
        assert_eq!(DaisyColor::Error.class("progress"), "progress-error");
    }

    #[test]
    fn class_list_combines_base_and_extra() {
        let extra = Classes::from("mx-1");
        let rendered = class_list(&["badge", "badge-sm"], &extra).to_string();
        assert!(rendered.contains("badge-sm"));
        assert!(rendered.contains("mx-1"));
    }

    #[test]
    fn aria_bool_strings() {
        assert_eq!(aria_bool(true), "true");
        assert_eq!(aria_bool(false), "false");
    }
}
