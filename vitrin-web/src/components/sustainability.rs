use crate::components::logo_strip::LogoStrip;
use vitrin_core::Sustainability;
use yew::prelude::*;

const IMAGE_CHIPS: [&str; 3] = ["BCI Cotton", "Geri Dönüştürülmüş Ambalaj", "Düşük Su Tüketimi"];

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub content: Sustainability,
}

#[function_component(SustainabilityValues)]
pub fn sustainability_values(p: &Props) -> Html {
    let content = &p.content;
    html! {
        <section class="sustainability bg-white">
            <div class="container mx-auto px-4 py-12 sm:py-16">
                <div class="mb-8 flex flex-col items-start justify-between gap-4 sm:flex-row sm:items-end">
                    <div>
                        <h2 class="text-3xl sm:text-4xl font-semibold tracking-tight">{ content.title.clone() }</h2>
                        <p class="mt-2 max-w-prose text-sm text-neutral-600">{ content.subtitle.clone() }</p>
                    </div>
                    <a
                        href={content.report_href.clone()}
                        class="inline-flex items-center rounded-full border border-neutral-900 px-5 py-2 text-sm font-medium transition hover:bg-neutral-900 hover:text-white"
                    >
                        { "Etki Raporu" }
                    </a>
                </div>

                <div class="grid grid-cols-1 gap-6 lg:grid-cols-2">
                    <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                        { for content.values.iter().map(|value| html! {
                            <div key={value.id.clone()} class="value-card rounded-2xl border border-black/5 bg-white/80 p-5 transition hover:-translate-y-0.5">
                                <div class="mb-3 inline-flex items-center gap-2 rounded-xl border border-black/10 bg-white px-2.5 py-1.5 text-sm font-medium text-neutral-900">
                                    { value.title.clone() }
                                </div>
                                <p class="text-sm text-neutral-600">{ value.desc.clone() }</p>
                                <div class="mt-4 h-px w-16 bg-neutral-200"></div>
                            </div>
                        }) }
                    </div>
                    <div class="relative overflow-hidden rounded-3xl border border-black/5">
                        if let Some(image) = content.image.clone() {
                            <div class="relative aspect-[4/3] sm:aspect-[5/4] lg:aspect-[16/12]">
                                <img src={image} alt="Sürdürülebilirlik" class="absolute inset-0 h-full w-full object-cover" loading="lazy" />
                            </div>
                            <div class="absolute inset-0 bg-gradient-to-t from-black/25 via-transparent to-transparent"></div>
                        }
                        <div class="absolute bottom-3 left-3 right-3 flex flex-wrap items-center gap-2">
                            { for IMAGE_CHIPS.iter().map(|chip| html! {
                                <span class="inline-flex items-center rounded-full border border-black/10 bg-white/90 px-3 py-1 text-xs font-medium text-neutral-900 backdrop-blur">
                                    { *chip }
                                </span>
                            }) }
                        </div>
                    </div>
                </div>

                if !content.stats.is_empty() {
                    <div class="mt-8 grid grid-cols-2 gap-4 sm:grid-cols-4">
                        { for content.stats.iter().map(|stat| html! {
                            <div key={stat.id.clone()} class="stat-card rounded-2xl border border-black/5 bg-white/80 px-5 py-4">
                                <div class="text-2xl font-semibold leading-none text-neutral-900">{ stat.value.clone() }</div>
                                <div class="mt-1 text-sm font-medium text-neutral-700">{ stat.label.clone() }</div>
                                if let Some(note) = stat.note.clone() {
                                    <div class="text-xs text-neutral-500">{ note }</div>
                                }
                            </div>
                        }) }
                    </div>
                }

                <LogoStrip title="Sertifikalar & Girişimler" logos={content.certifications.clone()} />
            </div>
        </section>
    }
}
