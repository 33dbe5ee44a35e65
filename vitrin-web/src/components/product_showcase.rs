use crate::components::daisy_ui::Carousel;
use crate::components::product_card::{ProductCard, ProductTile};
use vitrin_core::constants::{SHOWCASE_AUTOPLAY_MS, SHOWCASE_PER_VIEW};
use vitrin_core::{Product, SectionCopy};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub copy: SectionCopy,
    pub products: Vec<Product>,
}

#[derive(Properties, PartialEq, Clone)]
struct HeadingProps {
    copy: SectionCopy,
}

#[function_component(SectionHeading)]
fn section_heading(p: &HeadingProps) -> Html {
    html! {
        <div class="mb-8 flex flex-col items-start justify-between gap-4 sm:flex-row sm:items-end">
            <div>
                <h2 class="text-3xl sm:text-4xl font-semibold tracking-tight">{ p.copy.title.clone() }</h2>
                if let Some(description) = p.copy.description.clone() {
                    <p class="mt-2 max-w-prose text-sm text-neutral-600">{ description }</p>
                }
            </div>
            <a
                href={p.copy.see_all_href.clone().unwrap_or_else(|| "#".to_string())}
                class="inline-flex items-center rounded-full border border-neutral-900 px-5 py-2 text-sm font-medium transition hover:bg-neutral-900 hover:text-white"
            >
                { "Tümünü Gör" }
            </a>
        </div>
    }
}

/// Auto-advancing product carousel.
#[function_component(ProductShowcase)]
pub fn product_showcase(p: &Props) -> Html {
    html! {
        <section class="product-showcase container mx-auto px-4 py-12 sm:py-16">
            <SectionHeading copy={p.copy.clone()} />
            <Carousel per_view={SHOWCASE_PER_VIEW} show_controls=true autoplay_ms={Some(SHOWCASE_AUTOPLAY_MS)} aria_label={AttrValue::from(p.copy.title.clone())}>
                { for p.products.iter().map(|product| html! {
                    <ProductTile key={product.id.clone()} product={product.clone()} />
                }) }
            </Carousel>
        </section>
    }
}

/// Grid of the newest products with hover image swap.
#[function_component(NewArrivals)]
pub fn new_arrivals(p: &Props) -> Html {
    html! {
        <section class="new-arrivals bg-white">
            <div class="container mx-auto px-4 py-12 sm:py-16">
                <SectionHeading copy={p.copy.clone()} />
                <ul class="grid grid-cols-2 gap-4 sm:gap-6 md:grid-cols-3 lg:grid-cols-4">
                    { for p.products.iter().map(|product| html! {
                        <li key={product.id.clone()}>
                            <ProductCard product={product.clone()} />
                        </li>
                    }) }
                </ul>
            </div>
        </section>
    }
}
