use std::rc::Rc;

use crate::components::daisy_ui::foundation as f;
use crate::timer::use_interval;
use vitrin_core::SlideCursor;
use yew::{Reducible, use_reducer};

/// Moves applied to a [`CursorState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorAction {
    Next,
    Prev,
    GoTo(usize),
    Resize(usize),
}

/// Reducer-backed slide cursor, so timer ticks always advance from the latest position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CursorState(pub SlideCursor);

impl Reducible for CursorState {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let cursor = self.0;
        let next = match action {
            CursorAction::Next => cursor.next(),
            CursorAction::Prev => cursor.prev(),
            CursorAction::GoTo(index) => cursor.go_to(index),
            CursorAction::Resize(len) if len == cursor.len() => return self,
            CursorAction::Resize(len) => SlideCursor::new(len).go_to(cursor.active().min(len.saturating_sub(1))),
        };
        Rc::new(Self(next))
    }
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct CarouselProps {
    /// Items visible at once; the track scrolls one item per step.
    #[prop_or(1)]
    pub per_view: usize,
    #[prop_or_default]
    pub show_controls: bool,
    #[prop_or_default]
    pub autoplay_ms: Option<u32>,
    #[prop_or_default]
    pub aria_label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

/// Number of distinct scroll positions for `len` items shown `per_view` at a time.
#[must_use]
pub const fn positions(len: usize, per_view: usize) -> usize {
    let per_view = if per_view == 0 { 1 } else { per_view };
    if len <= per_view { 1 } else { len - per_view + 1 }
}

#[f::function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> f::Html {
    let items: Vec<f::Html> = props.children.iter().collect();
    let per_view = props.per_view.max(1);
    let stops = positions(items.len(), per_view);
    let cursor = use_reducer(|| CursorState(SlideCursor::new(stops)));
    {
        let dispatcher = cursor.dispatcher();
        f::use_effect_with(stops, move |stops| {
            dispatcher.dispatch(CursorAction::Resize(*stops));
            || {}
        });
    }
    {
        let dispatcher = cursor.dispatcher();
        let period = props.autoplay_ms.filter(|_| stops > 1);
        use_interval(period, f::Callback::from(move |()| dispatcher.dispatch(CursorAction::Next)));
    }
    let step = |action: CursorAction| {
        let dispatcher = cursor.dispatcher();
        f::Callback::from(move |_: yew::events::MouseEvent| dispatcher.dispatch(action))
    };

    let active = cursor.0.active();
    #[allow(clippy::cast_precision_loss)]
    let offset = active as f64 * 100.0 / per_view as f64;
    #[allow(clippy::cast_precision_loss)]
    let basis = 100.0 / per_view as f64;
    let class = f::class_list(&["carousel", "relative", "overflow-hidden"], &props.class);
    f::html! {
        <div class={class} aria-roledescription="carousel" aria-label={props.aria_label.clone()}>
            <div class="carousel-track flex transition-transform duration-500" style={format!("transform: translateX(-{offset:.4}%);")}>
                { for items.into_iter().enumerate().map(|(idx, item)| {
                    let visible = idx >= active && idx < active + per_view;
                    f::html! {
                        <div class="carousel-item shrink-0 px-2" style={format!("flex-basis: {basis:.4}%;")} aria-hidden={f::aria_bool(!visible)}>
                            { item }
                        </div>
                    }
                }) }
            </div>
            if props.show_controls && stops > 1 {
                <div class="carousel-controls pointer-events-none absolute inset-y-0 left-0 right-0 flex items-center justify-between">
                    <button type="button" class="pointer-events-auto btn btn-circle btn-sm bg-white/90" aria-label="Önceki" onclick={step(CursorAction::Prev)}>{"‹"}</button>
                    <button type="button" class="pointer-events-auto btn btn-circle btn-sm bg-white/90" aria-label="Sonraki" onclick={step(CursorAction::Next)}>{"›"}</button>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: CursorState, action: CursorAction) -> CursorState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn positions_cover_partial_views() {
        assert_eq!(positions(8, 4), 5);
        assert_eq!(positions(3, 4), 1);
        assert_eq!(positions(0, 1), 1);
        assert_eq!(positions(5, 0), 5);
    }

    #[test]
    fn reducer_wraps_and_resizes() {
        let state = CursorState(SlideCursor::new(3));
        assert_eq!(reduce(state, CursorAction::Prev).0.active(), 2);
        let moved = reduce(state, CursorAction::GoTo(2));
        let shrunk = reduce(moved, CursorAction::Resize(2));
        assert_eq!(shrunk.0.len(), 2);
        assert_eq!(shrunk.0.active(), 1);
        assert_eq!(reduce(shrunk, CursorAction::Resize(2)), shrunk);
    }
}
