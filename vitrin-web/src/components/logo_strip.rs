use vitrin_core::Logo;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MarkProps {
    pub logo: Logo,
    #[prop_or(AttrValue::Static("h-7 w-auto grayscale opacity-90 transition hover:opacity-100"))]
    pub img_class: AttrValue,
}

/// Greyscale logo, wrapped in a link when the logo carries one.
#[function_component(LogoMark)]
pub fn logo_mark(p: &MarkProps) -> Html {
    let img = html! {
        <img src={p.logo.src.clone()} alt={p.logo.alt.clone()} class={p.img_class.clone()} loading="lazy" />
    };
    match p.logo.href.clone() {
        Some(href) => html! {
            <a {href} aria-label={p.logo.alt.clone()} class="inline-flex items-center">{ img }</a>
        },
        None => img,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub title: AttrValue,
    pub logos: Vec<Logo>,
}

/// Captioned row of logos; renders nothing for an empty list.
#[function_component(LogoStrip)]
pub fn logo_strip(p: &Props) -> Html {
    if p.logos.is_empty() {
        return html! {};
    }
    html! {
        <div class="logo-strip mt-8 rounded-2xl border border-black/5 bg-white/80 p-4 sm:p-5">
            <div class="mb-3 text-sm text-neutral-500">{ p.title.clone() }</div>
            <ul class="flex flex-wrap items-center gap-4 sm:gap-6">
                { for p.logos.iter().map(|logo| html! {
                    <li key={logo.alt.clone()} class="shrink-0">
                        <LogoMark logo={logo.clone()} />
                    </li>
                }) }
            </ul>
        </div>
    }
}
