use crate::components::logo_strip::LogoMark;
use vitrin_core::{Logo, TrustItem};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or(AttrValue::Static("Ödeme & Güven"))]
    pub title: AttrValue,
    pub payments: Vec<Logo>,
    pub trust: Vec<TrustItem>,
}

#[function_component(PaymentTrust)]
pub fn payment_trust(p: &Props) -> Html {
    html! {
        <section class="payment-trust bg-white">
            <div class="container mx-auto px-4 py-12 sm:py-16">
                <div class="mb-6 flex items-end justify-between">
                    <h2 class="text-2xl sm:text-3xl font-semibold tracking-tight">{ p.title.clone() }</h2>
                </div>
                <div class="rounded-3xl border border-black/5 bg-white/80">
                    <div class="flex flex-wrap items-center justify-between gap-3 border-b border-black/5 px-4 py-4 sm:px-6">
                        <div class="text-sm text-neutral-500">{ "Kabul Edilen Ödemeler" }</div>
                        <ul class="flex flex-wrap items-center gap-3 sm:gap-4">
                            { for p.payments.iter().map(|logo| html! {
                                <li key={logo.alt.clone()} class="payment-logo shrink-0">
                                    <LogoMark logo={logo.clone()} img_class="h-6 w-auto grayscale opacity-90 transition hover:opacity-100" />
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="grid grid-cols-1 gap-4 px-4 py-6 sm:grid-cols-2 sm:px-6 lg:grid-cols-4">
                        { for p.trust.iter().map(|item| html! {
                            <div key={item.title.clone()} class="trust-item flex items-start gap-3 rounded-2xl border border-transparent px-3 py-3 transition hover:border-black/10">
                                <div class="mt-0.5 rounded-xl border border-black/10 p-2" aria-hidden="true">{ "✓" }</div>
                                <div>
                                    <div class="text-sm font-semibold">{ item.title.clone() }</div>
                                    if let Some(subtitle) = item.subtitle.clone() {
                                        <div class="text-xs text-neutral-500">{ subtitle }</div>
                                    }
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn lists_every_payment_and_trust_item() {
        let catalog = crate::content::catalog().unwrap();
        let html = block_on(
            LocalServerRenderer::<PaymentTrust>::with_props(Props {
                title: "Ödeme & Güven".into(),
                payments: catalog.payments.clone(),
                trust: catalog.trust.clone(),
            })
            .render(),
        );
        assert_eq!(html.matches("payment-logo").count(), 7);
        assert_eq!(html.matches("trust-item").count(), 4);
        assert!(html.contains("256-bit SSL &amp; 3D Secure") || html.contains("256-bit SSL & 3D Secure"));
    }
}
