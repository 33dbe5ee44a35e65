use crate::components::newsletter::NewsletterSignup;
use vitrin_core::{Brand, FooterColumn, Link};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: Brand,
    pub columns: Vec<FooterColumn>,
    pub socials: Vec<Link>,
    pub legal: Vec<Link>,
    /// Year printed in the copyright line.
    pub year: i32,
}

fn social_initial(label: &str) -> String {
    label.chars().next().map(String::from).unwrap_or_default()
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let privacy_href = p
        .legal
        .first()
        .map_or_else(|| AttrValue::Static("#"), |link| AttrValue::from(link.href.clone()));

    html! {
        <footer class="site-footer mt-20 border-t border-black/5 bg-white text-neutral-800">
            <div class="container mx-auto px-4 py-12">
                <div class="grid grid-cols-1 gap-10 sm:grid-cols-2 lg:grid-cols-4">
                    <div>
                        <a href="/" aria-label={format!("{} anasayfa", p.brand.name)} class="inline-flex items-center">
                            <img src={p.brand.logo_footer.clone()} alt={p.brand.name.clone()} class="h-20 w-auto shrink-0 sm:h-24 md:h-28" />
                        </a>
                        <p class="mt-4 max-w-sm text-sm text-neutral-600">{ p.brand.tagline.clone() }</p>
                        <div class="mt-5 flex items-center gap-3">
                            { for p.socials.iter().map(|social| html! {
                                <a
                                    key={social.label.clone()}
                                    href={social.href.clone()}
                                    aria-label={social.label.clone()}
                                    class="social-link inline-flex size-9 items-center justify-center rounded-full border border-black/10 transition hover:bg-black hover:text-white"
                                >
                                    { social_initial(&social.label) }
                                </a>
                            }) }
                        </div>
                    </div>

                    { for p.columns.iter().map(|column| html! {
                        <div key={column.title.clone()}>
                            <h3 class="text-base font-semibold">{ column.title.clone() }</h3>
                            <ul class="mt-3 space-y-2 text-sm">
                                { for column.links.iter().map(|link| html! {
                                    <li key={link.label.clone()}>
                                        <a href={link.href.clone()} class="text-neutral-600 transition hover:text-neutral-900">{ link.label.clone() }</a>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    }) }

                    <NewsletterSignup {privacy_href} />
                </div>
            </div>

            <div class="border-t border-black/5">
                <div class="container mx-auto flex flex-col items-center justify-between gap-4 px-4 py-6 text-sm text-neutral-500 sm:flex-row">
                    <p class="copyright">{ format!("© {} {} — Sunum amaçlıdır.", p.year, p.brand.name) }</p>
                    <nav class="flex items-center gap-6">
                        { for p.legal.iter().map(|link| html! {
                            <a key={link.label.clone()} href={link.href.clone()} class="hover:text-neutral-800">{ link.label.clone() }</a>
                        }) }
                    </nav>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_columns_socials_and_year() {
        let catalog = crate::content::catalog().unwrap();
        let html = block_on(
            LocalServerRenderer::<Footer>::with_props(Props {
                brand: catalog.brand.clone(),
                columns: catalog.footer_columns.clone(),
                socials: catalog.socials.clone(),
                legal: catalog.legal_links.clone(),
                year: 2025,
            })
            .render(),
        );
        assert!(html.contains("© 2025 Flow Fashion — Sunum amaçlıdır."));
        assert_eq!(html.matches("social-link").count(), 4);
        assert!(html.contains("Beden Rehberi"));
        assert!(html.contains("src=\"/logo.jpg\""));
        assert!(html.contains("Abone Ol"));
    }

    #[test]
    fn social_initial_handles_empty_labels() {
        assert_eq!(social_initial("Instagram"), "I");
        assert_eq!(social_initial(""), "");
    }
}
