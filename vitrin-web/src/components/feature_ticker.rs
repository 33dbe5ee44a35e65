use vitrin_core::FeatureItem;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<FeatureItem>,
    /// Seconds for one full loop of the marquee.
    #[prop_or(28)]
    pub duration_s: u32,
    #[prop_or(true)]
    pub edge_fade: bool,
}

/// Endless marquee of brand promises; the track is rendered twice so the
/// CSS animation can wrap without a visible seam.
#[function_component(FeatureTicker)]
pub fn feature_ticker(p: &Props) -> Html {
    let track = p.items.iter().chain(p.items.iter()).enumerate();
    let style = format!("--ft-duration: {}s; --ft-gap: 2.5rem;", p.duration_s);

    html! {
        <div class="feature-ticker relative w-full overflow-hidden border-b-2 border-orange-500 bg-black text-white" {style}>
            if p.edge_fade {
                <div class="pointer-events-none absolute inset-y-0 left-0 w-10 bg-gradient-to-r from-black to-transparent"></div>
                <div class="pointer-events-none absolute inset-y-0 right-0 w-10 bg-gradient-to-l from-black to-transparent"></div>
            }
            <div class="select-none py-2">
                <div class="ft-track">
                    { for track.map(|(idx, item)| html! {
                        <span key={idx} class="ft-item inline-flex flex-none items-center gap-2 text-sm opacity-90 md:text-base">
                            <span class="shrink-0" aria-hidden="true">{ item.icon.glyph() }</span>
                            <span class="tracking-tight">{ item.label.clone() }</span>
                        </span>
                    }) }
                </div>
            </div>
        </div>
    }
}
