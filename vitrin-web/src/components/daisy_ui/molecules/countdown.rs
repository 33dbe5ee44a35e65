use crate::components::daisy_ui::foundation as f;
use vitrin_core::RemainingTime;

const UNIT_LABELS: [&str; 4] = ["Gün", "Saat", "Dak", "San"];

#[derive(f::Properties, PartialEq, Eq, Clone)]
pub struct CountdownProps {
    pub remaining: RemainingTime,
    #[prop_or_default]
    pub expired: bool,
    #[prop_or_default]
    pub class: f::Classes,
}

fn spoken(remaining: &RemainingTime) -> String {
    format!(
        "{} gün {} saat {} dakika {} saniye kaldı",
        remaining.days, remaining.hours, remaining.minutes, remaining.seconds
    )
}

#[f::function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> f::Html {
    let class = f::class_list(&["countdown", "flex", "items-center", "gap-2", "tabular-nums"], &props.class);
    let padded = props.remaining.padded();
    let values = [padded.days, padded.hours, padded.minutes, padded.seconds];
    let aria = if props.expired {
        "Süre doldu".to_string()
    } else {
        spoken(&props.remaining)
    };
    f::html! {
        <div class={class} role="timer" aria-live="polite" aria-label={aria}>
            { for values.into_iter().zip(UNIT_LABELS).enumerate().map(|(idx, (value, unit))| f::html! {
                <>
                    if idx > 0 {
                        <span class="opacity-40">{ ":" }</span>
                    }
                    <div class="countdown-pill inline-flex min-w-[3.5rem] flex-col items-center justify-center rounded-xl border border-black/10 px-3 py-2">
                        <span>{ value }</span>
                        <span class="mt-0.5 text-[10px] font-medium uppercase tracking-wide text-neutral-500">{ unit }</span>
                    </div>
                </>
            }) }
        </div>
    }
}
