use crate::components::daisy_ui::Collapse;
use crate::components::logo_strip::LogoStrip;
use vitrin_core::ShippingPolicy;
use vitrin_core::shipping::{badges, express_delivery_label, standard_delivery_label};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub policy: ShippingPolicy,
}

#[derive(Properties, PartialEq, Clone)]
struct InfoCardProps {
    title: AttrValue,
    headline: AttrValue,
    #[prop_or_default]
    note: Option<AttrValue>,
    #[prop_or_default]
    link: Option<(AttrValue, AttrValue)>,
}

#[function_component(InfoCard)]
fn info_card(p: &InfoCardProps) -> Html {
    html! {
        <div class="info-card relative overflow-hidden rounded-2xl border border-black/5 bg-white/80 p-4 transition hover:-translate-y-0.5 sm:p-5">
            <div class="mb-3 inline-flex items-center gap-2 rounded-xl border border-black/10 bg-white px-2.5 py-1.5 text-sm font-medium text-neutral-900">
                { p.title.clone() }
            </div>
            <div class="text-base font-semibold text-neutral-900">{ p.headline.clone() }</div>
            if let Some(note) = p.note.clone() {
                <div class="mt-1 text-sm text-neutral-600">{ note }</div>
            }
            if let Some((href, label)) = p.link.clone() {
                <div class="mt-3">
                    <a {href} class="inline-flex items-center rounded-full border border-neutral-900 px-4 py-1.5 text-sm font-medium transition hover:bg-neutral-900 hover:text-white">
                        { label }
                    </a>
                </div>
            }
        </div>
    }
}

/// Delivery times, returns window, carriers and common questions.
#[function_component(ShippingReturns)]
pub fn shipping_returns(p: &Props) -> Html {
    let policy = &p.policy;
    let exchange_note = if policy.exchange_allowed {
        "Beden/renk değişimi desteklenir."
    } else {
        "Değişim desteklenmiyor."
    };

    html! {
        <section class="shipping-returns bg-white">
            <div class="container mx-auto px-4 py-12 sm:py-16">
                <div class="mb-8 flex flex-col items-start justify-between gap-4 sm:flex-row sm:items-end">
                    <div>
                        <h2 class="text-3xl sm:text-4xl font-semibold tracking-tight">{ "Kargo & İade Bilgileri" }</h2>
                        <p class="mt-2 max-w-prose text-sm text-neutral-600">{ "Hızlı teslimat, kolay iade ve güvenli alışveriş." }</p>
                    </div>
                    <div class="flex flex-wrap items-center gap-2">
                        { for badges(policy).into_iter().map(|badge| html! {
                            <span class="policy-badge inline-flex items-center rounded-full border border-neutral-300 bg-white px-3 py-1 text-xs font-medium text-neutral-700">
                                { badge }
                            </span>
                        }) }
                    </div>
                </div>

                <div class="grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                    <InfoCard
                        title="Standart Teslimat"
                        headline={standard_delivery_label(policy.standard_delivery_days)}
                        note={Some(AttrValue::Static("Siparişler aynı gün kargoya hazırlanır."))}
                    />
                    <InfoCard
                        title="Hızlı Teslimat"
                        headline={express_delivery_label(policy.express_delivery_days)}
                        note={Some(AttrValue::Static("Seçili illerde geçerlidir."))}
                    />
                    <InfoCard
                        title="İade & Değişim"
                        headline={format!("{} gün içinde kolay iade", policy.returns_window_days)}
                        note={Some(AttrValue::Static(exchange_note))}
                        link={Some((AttrValue::from(policy.policy_href.clone()), AttrValue::Static("Politikayı Gör")))}
                    />
                    <InfoCard
                        title="Güvenli Alışveriş"
                        headline="256-bit SSL & 3D Secure"
                        note={Some(AttrValue::Static("Ödemeleriniz güvende."))}
                    />
                </div>

                <LogoStrip title="Anlaşmalı Kargolar" logos={policy.carriers.clone()} />

                <div class="mt-8 flex flex-col items-start justify-between gap-3 rounded-2xl border border-black/5 bg-white/80 px-4 py-4 sm:flex-row sm:items-center sm:px-6">
                    <p class="text-sm text-neutral-700">
                        { "Sorularınız mı var? " }<span class="font-medium">{ "7/24 destek" }</span>{ " ekibimiz yardımcı olur." }
                    </p>
                    <div class="flex items-center gap-2">
                        <a
                            href={policy.support_href.clone()}
                            class="inline-flex items-center rounded-full border border-neutral-900 px-5 py-2 text-sm font-medium transition hover:bg-neutral-900 hover:text-white"
                        >
                            { "Destek ile İletişime Geç" }
                        </a>
                        <a
                            href={policy.policy_href.clone()}
                            class="inline-flex items-center rounded-full border border-black/10 px-5 py-2 text-sm font-medium transition hover:bg-black hover:text-white"
                        >
                            { "Kargo & İade Politikası" }
                        </a>
                    </div>
                </div>

                <div class="mt-8 grid grid-cols-1 gap-3 sm:grid-cols-2">
                    { for policy.faqs.iter().map(|faq| html! {
                        <Collapse key={faq.question.clone()} title={faq.question.clone()} class={classes!("faq", "rounded-2xl", "bg-white/80", "p-4")}>
                            <p class="mt-3 text-sm text-neutral-600">{ faq.answer.clone() }</p>
                        </Collapse>
                    }) }
                </div>
            </div>
        </section>
    }
}
