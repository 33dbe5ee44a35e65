use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ProgressProps {
    /// Percentage in `0..=100`; larger values are clamped.
    pub percent: u8,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub class: f::Classes,
}

#[f::function_component(Progress)]
pub fn progress(props: &ProgressProps) -> f::Html {
    let mut class = f::class_list(&["progress", "w-full", "h-2"], &props.class);
    if let Some(variant) = props.variant {
        class.push(variant.class("progress"));
    }
    let percent = props.percent.min(100);
    f::html! {
        <div class="space-y-1">
            <progress
                class={class}
                value={percent.to_string()}
                max="100"
                aria-valuenow={percent.to_string()}
                aria-valuemin="0"
                aria-valuemax="100"
            ></progress>
            if let Some(label) = props.label.clone() {
                <span class="text-xs text-black/60">{ label }</span>
            }
        </div>
    }
}
