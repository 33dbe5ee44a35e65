use futures::executor::block_on;
use vitrin_core::Timestamp;
use vitrin_web::pages::home::{HomePage, Props as HomeProps};
use vitrin_web::pages::NotFound;
use vitrin_web::router::Route;
use yew::LocalServerRenderer;
use yew_router::Routable;

const OPENED_AT: Timestamp = Timestamp::from_millis(1_750_000_000_000);

fn render_home() -> String {
    block_on(
        LocalServerRenderer::<HomePage>::with_props(HomeProps {
            now: Some(OPENED_AT),
        })
        .render(),
    )
}

#[test]
fn home_page_renders_every_section_in_order() {
    let html = render_home();
    let order = [
        "site-header",
        "showcase-slider",
        "feature-ticker",
        "product-showcase",
        "collections-showcase",
        "new-arrivals",
        "limited-offer",
        "payment-trust",
        "sustainability",
        "shipping-returns",
        "site-footer",
    ];
    let mut cursor = 0;
    for marker in order {
        let found = html[cursor..]
            .find(marker)
            .unwrap_or_else(|| panic!("{marker} missing or out of order"));
        cursor += found;
    }
}

#[test]
fn offer_counts_down_from_configured_duration() {
    let html = render_home();
    assert!(html.contains(">01</span>"), "days pill");
    assert!(html.contains(">12</span>"), "hours pill");
    assert!(html.contains("aria-disabled=\"false\""));
    assert!(!html.contains("offer-progress"));
}

#[test]
fn footer_year_comes_from_load_time() {
    assert!(render_home().contains("© 2025 Flow Fashion"));
}

#[test]
fn not_found_links_home() {
    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("Sayfa bulunamadı"));
    assert!(html.contains("href=\"/\""));
    assert_eq!(Route::recognize("/yok"), Some(Route::NotFound));
}
