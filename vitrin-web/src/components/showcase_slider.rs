use crate::components::daisy_ui::foundation::aria_bool;
use crate::components::daisy_ui::organisms::carousel::{CursorAction, CursorState};
use crate::timer::use_interval;
use vitrin_core::constants::SLIDER_AUTOPLAY_MS;
use vitrin_core::{Slide, SlideCursor, SlideStyle};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub slides: Vec<Slide>,
    #[prop_or(true)]
    pub autoplay: bool,
}

const fn overlay_class(style: SlideStyle) -> Option<&'static str> {
    match style {
        SlideStyle::CenterDark => Some(
            "pointer-events-none absolute inset-0 bg-[radial-gradient(120%_80%_at_50%_100%,rgba(0,0,0,0.45),transparent_60%)]",
        ),
        SlideStyle::LeftLight => {
            Some("absolute inset-0 bg-gradient-to-t from-black/50 via-transparent to-transparent")
        }
        SlideStyle::SplitRight => {
            Some("absolute inset-0 bg-gradient-to-r from-black/60 via-black/30 to-transparent")
        }
        SlideStyle::Solid => None,
    }
}

fn background(slide: &Slide) -> Html {
    html! {
        <>
            if let Some(src) = slide.image.clone() {
                <img src={src} alt={slide.title.clone()} class="absolute inset-0 h-full w-full object-cover" />
            } else {
                <div class="absolute inset-0" style={format!("background: {};", slide.background())}></div>
            }
            <div class="absolute inset-0 bg-black/35"></div>
            if let Some(class) = overlay_class(slide.style) {
                <div class={class}></div>
            }
        </>
    }
}

fn copy_block(slide: &Slide) -> Html {
    html! {
        <div class="slide-copy text-white">
            if let Some(subtitle) = slide.subtitle.clone() {
                <p class="mb-3 text-xs uppercase tracking-[0.2em] text-white/80">{ subtitle }</p>
            }
            <h2 class="text-4xl md:text-5xl lg:text-6xl font-semibold leading-[1.1] text-white">{ slide.title.clone() }</h2>
            if let Some(cta) = slide.cta.clone() {
                <div class="mt-6">
                    <a href={cta.href} class="inline-flex items-center rounded-full border border-white/90 px-5 py-2 text-sm font-medium text-white transition hover:bg-white/10">
                        { cta.label }
                    </a>
                </div>
            }
        </div>
    }
}

fn slide_body(slide: &Slide) -> Html {
    match slide.style {
        SlideStyle::SplitRight => html! {
            <div class="relative z-10 grid h-full grid-cols-1 md:grid-cols-2">
                <div class="order-2 flex items-center md:order-1">
                    <div class="w-full px-6 md:px-10 lg:px-16">{ copy_block(slide) }</div>
                </div>
                <div class="order-1 md:order-2"></div>
            </div>
        },
        SlideStyle::CenterDark => html! {
            <div class="absolute inset-0 z-10 flex items-center justify-center text-center">
                <div class="w-full max-w-3xl px-6 md:px-8">{ copy_block(slide) }</div>
            </div>
        },
        SlideStyle::LeftLight | SlideStyle::Solid => html! {
            <div class="absolute inset-0 z-10 flex items-end">
                <div class="w-full px-6 pb-10 md:px-10 md:pb-14 lg:px-16 lg:pb-16">{ copy_block(slide) }</div>
            </div>
        },
    }
}

/// Full-bleed hero slider with fade transitions, arrows and dots.
#[function_component(ShowcaseSlider)]
pub fn showcase_slider(p: &Props) -> Html {
    let len = p.slides.len();
    let cursor = use_reducer(|| CursorState(SlideCursor::new(len)));
    {
        let dispatcher = cursor.dispatcher();
        use_effect_with(len, move |len| {
            dispatcher.dispatch(CursorAction::Resize(*len));
            || {}
        });
    }
    {
        let dispatcher = cursor.dispatcher();
        let period = (p.autoplay && len > 1).then_some(SLIDER_AUTOPLAY_MS);
        use_interval(period, Callback::from(move |()| dispatcher.dispatch(CursorAction::Next)));
    }
    let step = |action: CursorAction| {
        let dispatcher = cursor.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };
    let active = cursor.0;

    html! {
        <section class="showcase-slider relative w-full" aria-roledescription="carousel" aria-label="Öne çıkanlar">
            <div class="relative h-[70vh] min-h-[520px] overflow-hidden md:h-[100vh]">
                { for p.slides.iter().enumerate().map(|(idx, slide)| {
                    let is_active = active.is_active(idx);
                    let class = if is_active {
                        classes!("slide", "absolute", "inset-0", "transition-opacity", "duration-700", "opacity-100", "active")
                    } else {
                        classes!("slide", "absolute", "inset-0", "transition-opacity", "duration-700", "opacity-0", "pointer-events-none")
                    };
                    html! {
                        <div key={slide.id.clone()} class={class} aria-hidden={aria_bool(!is_active)} data-style={format!("{:?}", slide.style)}>
                            { background(slide) }
                            { slide_body(slide) }
                        </div>
                    }
                }) }
                if len > 1 {
                    <button type="button" class="absolute left-4 top-1/2 z-20 -translate-y-1/2 text-3xl text-white" aria-label="Önceki slayt" onclick={step(CursorAction::Prev)}>{ "‹" }</button>
                    <button type="button" class="absolute right-4 top-1/2 z-20 -translate-y-1/2 text-3xl text-white" aria-label="Sonraki slayt" onclick={step(CursorAction::Next)}>{ "›" }</button>
                    <div class="absolute bottom-6 left-0 right-0 z-20 flex justify-center gap-2" role="tablist">
                        { for (0..len).map(|idx| {
                            let is_active = active.is_active(idx);
                            let class = if is_active {
                                classes!("slider-dot", "h-2", "w-2", "rounded-full", "bg-white")
                            } else {
                                classes!("slider-dot", "h-2", "w-2", "rounded-full", "bg-[#c7c7c7]", "opacity-30")
                            };
                            html! {
                                <button type="button" class={class} role="tab" aria-selected={aria_bool(is_active)}
                                    aria-label={format!("{}. slayta git", idx + 1)} onclick={step(CursorAction::GoTo(idx))}></button>
                            }
                        }) }
                    </div>
                }
            </div>
        </section>
    }
}
