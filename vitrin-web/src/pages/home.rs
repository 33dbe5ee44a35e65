use crate::components::{
    CollectionsShowcase, FeatureTicker, Footer, Header, LimitedOffer, NewArrivals,
    PaymentTrust, ProductShowcase, ShippingReturns, ShowcaseSlider, SustainabilityValues,
};
use crate::content::catalog;
use crate::timer::BrowserClock;
use vitrin_core::{Catalog, Clock, Timestamp};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    /// Render as if the page was opened at this instant and keep the offer frozen there.
    #[prop_or_default]
    pub now: Option<Timestamp>,
}

#[derive(Properties, PartialEq, Clone)]
struct ErrorProps {
    message: AttrValue,
}

#[function_component(LoadError)]
fn load_error(p: &ErrorProps) -> Html {
    html! {
        <main class="load-error container mx-auto px-4 py-24" role="alert">
            <h1 class="text-2xl font-semibold">{ "Mağaza içeriği yüklenemedi" }</h1>
            <p class="mt-2 text-sm text-neutral-600">{ p.message.clone() }</p>
        </main>
    }
}

fn offer_section(catalog: &Catalog, loaded_at: Timestamp, now: Option<Timestamp>) -> Html {
    let Some(product) = catalog.offer_product() else {
        log::warn!("limited offer skipped: product {} not in catalog", catalog.offer.product_id);
        return html! {};
    };
    match catalog.offer_window(loaded_at) {
        Ok(window) => html! {
            <LimitedOffer
                product={product.clone()}
                offer={catalog.offer.clone()}
                {window}
                {now}
            />
        },
        Err(err) => {
            log::warn!("limited offer skipped: {err}");
            html! {}
        }
    }
}

/// The storefront landing page, every section in catalog order.
#[function_component(HomePage)]
pub fn home_page(p: &Props) -> Html {
    let pinned = p.now;
    let loaded_at = use_state(move || pinned.unwrap_or_else(|| BrowserClock.now()));

    let catalog = match catalog() {
        Ok(catalog) => catalog,
        Err(message) => return html! { <LoadError message={message} /> },
    };
    let year = loaded_at.year().unwrap_or(2025);

    html! {
        <>
            <Header
                brand={catalog.brand.clone()}
                top_links={catalog.top_links.clone()}
                nav={catalog.nav.clone()}
            />
            <main class="home">
                <ShowcaseSlider slides={catalog.slides.clone()} />
                <FeatureTicker items={catalog.features.clone()} />
                <ProductShowcase copy={catalog.showcase.clone()} products={catalog.products.clone()} />
                <CollectionsShowcase items={catalog.collections.clone()} />
                <NewArrivals copy={catalog.new_arrivals.clone()} products={catalog.new_products.clone()} />
                { offer_section(catalog, *loaded_at, p.now) }
                <PaymentTrust payments={catalog.payments.clone()} trust={catalog.trust.clone()} />
                <SustainabilityValues content={catalog.sustainability.clone()} />
                <ShippingReturns policy={catalog.shipping.clone()} />
            </main>
            <Footer
                brand={catalog.brand.clone()}
                columns={catalog.footer_columns.clone()}
                socials={catalog.socials.clone()}
                legal={catalog.legal_links.clone()}
                {year}
            />
        </>
    }
}
