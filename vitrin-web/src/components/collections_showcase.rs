use crate::components::daisy_ui::foundation::aria_bool;
use crate::components::daisy_ui::organisms::carousel::{CursorAction, CursorState};
use vitrin_core::{Collection, SlideCursor};
use yew::prelude::*;

const COLUMNS: usize = 4;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub items: Vec<Collection>,
}

/// Full-bleed collection picker: the hovered or focused column drives the
/// section background.
#[function_component(CollectionsShowcase)]
pub fn collections_showcase(p: &Props) -> Html {
    let shown: Vec<&Collection> = p.items.iter().take(COLUMNS).collect();
    let cursor = use_reducer(|| CursorState(SlideCursor::new(shown.len())));
    {
        let cursor = cursor.clone();
        use_effect_with(shown.len(), move |len| {
            cursor.dispatch(CursorAction::Resize(*len));
            || ()
        });
    }

    let Some(active) = shown.get(cursor.0.active()).or_else(|| shown.first()) else {
        return html! {};
    };

    html! {
        <section class="collections-showcase relative h-[90svh] min-h-[580px] w-full overflow-hidden">
            <div class="absolute inset-0">
                <img
                    src={active.image.clone()}
                    alt={active.title.clone()}
                    class="absolute inset-0 h-full w-full object-cover"
                />
                <div class="absolute inset-0 bg-black/40"></div>
            </div>
            <div class="relative z-10 h-full">
                <div class="grid h-full grid-cols-2 lg:grid-cols-4">
                    { for shown.iter().enumerate().map(|(idx, item)| {
                        let is_active = cursor.0.is_active(idx);
                        let select = {
                            let cursor = cursor.clone();
                            move || cursor.dispatch(CursorAction::GoTo(idx))
                        };
                        let on_enter = { let select = select.clone(); Callback::from(move |_: MouseEvent| select()) };
                        let on_focus = { let select = select.clone(); Callback::from(move |_: FocusEvent| select()) };
                        let on_click = Callback::from(move |_: MouseEvent| select());
                        let info_class = classes!(
                            "collection-info", "absolute", "bottom-8", "left-1/2", "w-[88%]", "max-w-sm",
                            "-translate-x-1/2", "text-white", "transition", "duration-300",
                            if is_active { "translate-y-0 opacity-100" } else { "translate-y-4 opacity-0" },
                        );
                        html! {
                            <button
                                key={item.id.clone()}
                                type="button"
                                class="collection-column group relative isolate overflow-hidden text-left"
                                aria-label={item.title.clone()}
                                aria-current={aria_bool(is_active)}
                                onmouseenter={on_enter}
                                onfocus={on_focus}
                                onclick={on_click}
                            >
                                <div class="absolute inset-0 grid place-items-center px-6">
                                    <span class="text-[clamp(20px,2.2vw,30px)] font-semibold text-white/95 drop-shadow-sm">
                                        { item.title.clone() }
                                    </span>
                                </div>
                                <div class={info_class}>
                                    if let Some(subtitle) = item.subtitle.clone() {
                                        <div class="text-[10px] uppercase tracking-[0.18em] text-white/85">{ subtitle }</div>
                                    }
                                    if let Some(blurb) = item.blurb.clone() {
                                        <p class="mt-1 text-[13px]/6 text-white/90">{ blurb }</p>
                                    }
                                    <div class="mt-3 flex flex-wrap items-center gap-3">
                                        if let Some(count) = item.count_label() {
                                            <span class="rounded-full border border-white/35 px-3 py-1 text-xs text-white/90">{ count }</span>
                                        }
                                        <a
                                            href={item.href.clone()}
                                            class="inline-flex items-center gap-2 text-sm font-medium underline underline-offset-[6px]"
                                            aria-label={format!("{} koleksiyonu: Keşfet", item.title)}
                                        >
                                            { "Keşfet →" }
                                        </a>
                                    </div>
                                    <div class="mt-4 h-px w-24 bg-white/40"></div>
                                </div>
                            </button>
                        }
                    }) }
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

    fn render(items: Vec<Collection>) -> String {
        block_on(LocalServerRenderer::<CollectionsShowcase>::with_props(Props { items }).render())
    }

    #[test]
    fn first_collection_is_active() {
        let items = crate::content::catalog().unwrap().collections.clone();
        let html = render(items);
        assert_eq!(html.matches("collection-column").count(), 4);
        assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
        assert!(html.contains("128 ürün"));
        assert!(html.contains("src=\"/elbiseler.jpg\""));
    }

    #[test]
    fn empty_collection_list_renders_nothing() {
        assert!(!render(Vec::new()).contains("collections-showcase"));
    }
}
