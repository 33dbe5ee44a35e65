use crate::components::daisy_ui::foundation::aria_bool;
use crate::timer::{use_header_theme, use_scroll_lock};
use vitrin_core::{Brand, Drawer, Link};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub brand: Brand,
    pub top_links: Vec<Link>,
    pub nav: Vec<Link>,
    #[prop_or_default]
    pub cart_count: u32,
}

/// Fixed site header: transparent over the hero, solid after scrolling,
/// with a slide-in drawer for small screens.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let theme = use_header_theme();
    let drawer = use_state(Drawer::default);
    use_scroll_lock(drawer.is_open());

    let open_drawer = {
        let drawer = drawer.clone();
        Callback::from(move |_: MouseEvent| drawer.set(drawer.opened()))
    };
    let close_drawer = {
        let drawer = drawer.clone();
        Callback::from(move |_: MouseEvent| drawer.set(drawer.closed()))
    };
    let is_open = drawer.is_open();
    let hover = theme.hover_class();

    html! {
        <header class={classes!("site-header", "fixed", "inset-x-0", "top-0", "z-[120]", "w-full", "transition-colors", "duration-300", theme.shell_class())}>
            <div class={classes!("hidden", "md:block", "text-[12px]", "leading-none", "transition-colors", "duration-300", theme.top_bar_class())}>
                <div class="container mx-auto flex h-9 items-center justify-between px-4">
                    <div class="flex items-center gap-6 opacity-90">
                        { for p.top_links.iter().map(|link| html! {
                            <a key={link.label.clone()} href={link.href.clone()} class="hover:opacity-80">{ link.label.clone() }</a>
                        }) }
                    </div>
                    <span class="opacity-80">{ "TR" }</span>
                </div>
            </div>

            <div class="container mx-auto flex h-[64px] items-center justify-between px-4 md:h-[72px]">
                <div class="flex items-center gap-3">
                    <button
                        type="button"
                        class={classes!("-ml-2", "rounded", "p-2", "md:hidden", hover)}
                        aria-label="Menüyü aç"
                        aria-expanded={aria_bool(is_open)}
                        aria-controls="mobile-drawer"
                        onclick={open_drawer}
                    >
                        { "☰" }
                    </button>
                    <a href="/" class="flex items-center gap-3" aria-label={format!("{} anasayfa", p.brand.name)}>
                        <img
                            src={theme.logo(&p.brand).to_string()}
                            alt={p.brand.name.clone()}
                            class="header-logo h-20 w-auto shrink-0 transition-opacity duration-300 md:h-18"
                        />
                        <span class="sr-only">{ p.brand.name.clone() }</span>
                    </a>
                </div>

                <nav class="hidden items-center gap-7 text-[14px] md:flex">
                    { for p.nav.iter().map(|link| html! {
                        <a key={link.label.clone()} href={link.href.clone()} class="hover:opacity-70">{ link.label.clone() }</a>
                    }) }
                </nav>

                <div class="flex items-center gap-1 md:gap-2">
                    <button type="button" aria-label="Ara" class={classes!("rounded", "p-2", hover)}>{ "⌕" }</button>
                    <button type="button" aria-label="Hesabım" class={classes!("hidden", "rounded", "p-2", "sm:inline-flex", hover)}>{ "☺" }</button>
                    <button type="button" aria-label="Sepet" class={classes!("relative", "rounded", "p-2", hover)}>
                        { "👜" }
                        if p.cart_count > 0 {
                            <span class="cart-count absolute -right-1 -top-1 inline-flex min-w-[18px] items-center justify-center rounded-full bg-black px-1.5 text-[10px] font-semibold leading-5 text-white">
                                { p.cart_count }
                            </span>
                        }
                    </button>
                </div>
            </div>

            <div
                class={classes!("fixed", "inset-0", "z-[130]", (!is_open).then_some("pointer-events-none"))}
                aria-hidden={aria_bool(!is_open)}
            >
                <div
                    class={classes!("absolute", "inset-0", "bg-black/40", "transition-opacity", if is_open { "opacity-100" } else { "opacity-0" })}
                    onclick={close_drawer.clone()}
                ></div>
                <aside
                    id="mobile-drawer"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="mobile-drawer-title"
                    class={classes!(
                        "absolute", "left-0", "top-0", "h-full", "w-80", "max-w-[85%]", "bg-white", "text-black",
                        "shadow-xl", "transition-transform",
                        if is_open { "translate-x-0" } else { "-translate-x-full" },
                    )}
                >
                    <div class="flex h-[64px] items-center justify-between border-b px-4">
                        <span id="mobile-drawer-title" class="text-lg font-semibold">{ "Menü" }</span>
                        <button type="button" aria-label="Kapat" class="rounded p-2 hover:bg-black/5" onclick={close_drawer.clone()}>
                            { "✕" }
                        </button>
                    </div>
                    <nav class="p-2">
                        { for p.nav.iter().map(|link| html! {
                            <a
                                key={link.label.clone()}
                                href={link.href.clone()}
                                class="mobile-link block rounded-lg px-4 py-3 text-[15px] hover:bg-black/5"
                                onclick={close_drawer.clone()}
                            >
                                { link.label.clone() }
                            </a>
                        }) }
                    </nav>
                </aside>
            </div>
        </header>
    }
}
