use crate::components::daisy_ui::{Countdown, DaisyColor, Progress};
use crate::timer::use_offer_state;
use vitrin_core::{OfferConfig, Product, TimeWindow, Timestamp, format_try, savings};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Product,
    pub offer: OfferConfig,
    pub window: TimeWindow,
    /// Freeze the countdown at this instant (server rendering, previews).
    #[prop_or_default]
    pub now: Option<Timestamp>,
}

#[function_component(LimitedOffer)]
pub fn limited_offer(p: &Props) -> Html {
    let state = use_offer_state(p.window, p.now);
    let expired = state.is_expired;
    let product = &p.product;
    let saved = savings(product.price, product.compare_at);

    let cta_class = if state.cta_enabled() {
        classes!("offer-cta", "inline-flex", "items-center", "rounded-full", "px-5", "py-2", "text-sm", "font-medium", "transition",
            "border", "border-neutral-900", "text-neutral-900", "hover:bg-neutral-900", "hover:text-white")
    } else {
        classes!("offer-cta", "inline-flex", "items-center", "rounded-full", "px-5", "py-2", "text-sm", "font-medium", "transition",
            "cursor-not-allowed", "border", "border-neutral-300", "text-neutral-400")
    };

    html! {
        <section class="limited-offer bg-white" aria-labelledby="limited-offer-title">
            <div class="container mx-auto px-4 py-12 sm:py-16">
                <div class="mb-8 flex flex-col items-start justify-between gap-4 sm:flex-row sm:items-end">
                    <div>
                        <h2 id="limited-offer-title" class="text-3xl sm:text-4xl font-semibold tracking-tight">{ p.offer.title.clone() }</h2>
                        <p class="offer-status mt-2 max-w-prose text-sm text-neutral-600">
                            { if expired { "Süre doldu." } else { "Sınırlı süre için özel fiyat." } }
                        </p>
                    </div>
                    if let Some(percent) = state.progress_percent {
                        <div class="offer-progress w-full sm:w-80">
                            <div class="mb-1 flex items-center justify-between text-xs text-neutral-500">
                                <span>{ "İlerleme" }</span>
                                <span>{ format!("{percent}%") }</span>
                            </div>
                            <Progress percent={percent} variant={DaisyColor::Neutral} />
                        </div>
                    }
                </div>

                <article class="grid items-stretch gap-6 rounded-3xl border border-black/5 p-4 sm:p-6 lg:grid-cols-2">
                    <div class="relative overflow-hidden rounded-2xl">
                        <div class="relative aspect-[4/5] sm:aspect-[3/4] lg:aspect-[16/10]">
                            if let Some(src) = product.primary_image() {
                                <img src={src.to_string()} alt={product.title.clone()} class="h-full w-full object-cover" />
                            }
                        </div>
                        <span class="absolute left-3 top-3 rounded-full bg-black/80 px-3 py-1 text-xs font-medium text-white">
                            { product.offer_badge() }
                        </span>
                        <span class="offer-chip absolute right-3 top-3 rounded-full bg-white/90 px-3 py-1 text-[11px] font-medium text-neutral-900">
                            { if expired { "Süre Doldu" } else { "Devam Ediyor" } }
                        </span>
                    </div>

                    <div class="flex flex-col justify-between rounded-2xl bg-white">
                        <div>
                            <h3 class="text-2xl sm:text-3xl font-semibold leading-tight">{ product.title.clone() }</h3>
                            <div class="mt-3 flex items-end gap-3">
                                <span class="offer-price text-2xl sm:text-3xl font-semibold">{ format_try(product.price) }</span>
                                if let Some(compare) = product.compare_at {
                                    <span class="text-sm sm:text-base text-neutral-400 line-through">{ format_try(compare) }</span>
                                }
                                if let Some(saved) = saved {
                                    <span class="offer-savings rounded-full bg-black px-2.5 py-1 text-xs font-medium text-white">
                                        { format!("{} indirim", format_try(saved)) }
                                    </span>
                                }
                            </div>
                            <div class="mt-5">
                                <span class="text-xs uppercase tracking-[0.18em] text-neutral-500">{ "Kalan Süre" }</span>
                                <Countdown remaining={state.remaining} expired={expired} class={classes!("mt-2", "text-2xl", "sm:text-3xl", "font-semibold")} />
                            </div>
                        </div>

                        <div class="mt-6 flex flex-wrap items-center gap-3">
                            <button
                                type="button"
                                class={cta_class}
                                disabled={expired}
                                aria-disabled={crate::components::daisy_ui::foundation::aria_bool(expired)}
                            >
                                { p.offer.cta_label.clone() }
                            </button>
                            <a
                                href={product.href_or_default()}
                                class="inline-flex items-center rounded-full border border-black/10 px-5 py-2 text-sm font-medium transition hover:bg-black hover:text-white"
                            >
                                { p.offer.link_label.clone() }
                            </a>
                        </div>
                    </div>
                </article>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    const NOW: Timestamp = Timestamp::from_millis(1_750_000_000_000);

    fn props(window: TimeWindow) -> Props {
        let catalog = crate::content::catalog().unwrap();
        Props {
            product: catalog.offer_product().unwrap().clone(),
            offer: catalog.offer.clone(),
            window,
            now: Some(NOW),
        }
    }

    fn render(props: Props) -> String {
        block_on(LocalServerRenderer::<LimitedOffer>::with_props(props).render())
    }

    #[test]
    fn active_offer_shows_countdown_and_enabled_cta() {
        let html = render(props(TimeWindow::ending_at(NOW.saturating_add_ms(90_061_000))));
        assert!(html.contains("Sınırlı süre için özel fiyat."));
        assert!(html.contains("Devam Ediyor"));
        assert_eq!(html.matches(">01</span>").count(), 4, "{html}");
        assert!(html.contains("aria-disabled=\"false\""));
        assert!(!html.contains("cursor-not-allowed"));
        assert!(!html.contains("offer-progress"));
        assert!(html.contains("₺899,90"));
        assert!(html.contains("₺300,00 indirim"));
    }

    #[test]
    fn expired_offer_disables_cta() {
        let html = render(props(TimeWindow::ending_at(NOW.saturating_sub_ms(5_000))));
        assert!(html.contains("Süre doldu."));
        assert!(html.contains("Süre Doldu"));
        assert!(html.contains("cursor-not-allowed"));
        assert!(html.contains("aria-disabled=\"true\""));
        assert_eq!(html.matches(">00</span>").count(), 4, "{html}");
    }

    #[test]
    fn progress_bar_only_with_start() {
        let window = TimeWindow::new(
            Some(NOW.saturating_sub_ms(1_800_000)),
            NOW.saturating_add_ms(1_800_000),
        );
        let html = render(props(window));
        assert!(html.contains("offer-progress"));
        assert!(html.contains("50%"));
        assert!(html.contains("value=\"50\""));
    }
}
