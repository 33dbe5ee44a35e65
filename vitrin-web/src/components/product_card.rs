use vitrin_core::{Product, format_try};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PriceProps {
    pub product: Product,
}

#[function_component(PriceRow)]
pub fn price_row(p: &PriceProps) -> Html {
    html! {
        <div class="mt-1 flex items-center gap-2">
            <span class="price text-base sm:text-lg font-semibold">{ format_try(p.product.price) }</span>
            if let Some(compare) = p.product.compare_at.filter(|compare| *compare > p.product.price) {
                <span class="compare-at text-xs text-neutral-400 line-through">{ format_try(compare) }</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub product: Product,
}

/// Compact tile used inside the product carousel; badge only when set.
#[function_component(ProductTile)]
pub fn product_tile(p: &Props) -> Html {
    let product = &p.product;
    html! {
        <article class="product-tile group rounded-2xl bg-white shadow-[0_8px_30px_rgba(0,0,0,0.06)] transition hover:-translate-y-0.5">
            <a href={product.href_or_default()} class="block">
                <div class="relative aspect-[3/4] overflow-hidden rounded-2xl">
                    if let Some(src) = product.primary_image() {
                        <img src={src.to_string()} alt={product.title.clone()} loading="lazy"
                            class="h-full w-full object-cover transition duration-500 group-hover:scale-105" />
                    }
                    if let Some(badge) = product.badge.clone() {
                        <span class="absolute left-2 top-2 rounded-full bg-black/80 px-2.5 py-1 text-xs font-medium text-white">{ badge }</span>
                    }
                </div>
                <div class="p-3 sm:p-4">
                    <h3 class="line-clamp-1 text-sm sm:text-base font-medium">{ product.title.clone() }</h3>
                    <PriceRow product={product.clone()} />
                </div>
            </a>
        </article>
    }
}

/// Grid card with hover image swap and a presentational add-to-cart chip.
#[function_component(ProductCard)]
pub fn product_card(p: &Props) -> Html {
    let product = &p.product;
    let hover = product.hover_image();
    let primary_class = if hover.is_some() {
        classes!("h-full", "w-full", "object-cover", "transition", "duration-500", "group-hover:opacity-0")
    } else {
        classes!("h-full", "w-full", "object-cover", "transition", "duration-500")
    };
    html! {
        <a href={product.href_or_default()} class="product-card group block">
            <div class="relative overflow-hidden rounded-2xl">
                <div class="relative aspect-[3/4]">
                    if let Some(src) = product.primary_image() {
                        <img src={src.to_string()} alt={product.title.clone()} loading="lazy" class={primary_class} />
                    }
                    if let Some(src) = hover {
                        <img src={src.to_string()} alt={format!("{} (alternatif)", product.title)} loading="lazy"
                            class="hover-image absolute inset-0 h-full w-full object-cover opacity-0 transition duration-500 group-hover:opacity-100" />
                    }
                </div>
                <span class="absolute left-2 top-2 rounded-full bg-black/80 px-2.5 py-1 text-xs font-medium text-white">
                    { product.card_badge() }
                </span>
            </div>
            <div class="mt-3 flex items-start justify-between gap-3">
                <h3 class="line-clamp-1 text-sm sm:text-base font-medium">{ product.title.clone() }</h3>
            </div>
            <PriceRow product={product.clone()} />
            <div class="mt-3">
                <span class="inline-flex items-center rounded-full border border-neutral-900 px-4 py-1.5 text-sm font-medium transition group-hover:bg-neutral-900 group-hover:text-white">
                    { "Sepete Ekle" }
                </span>
            </div>
        </a>
    }
}
