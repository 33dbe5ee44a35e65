use std::rc::Rc;

use crate::components::daisy_ui::foundation::aria_bool;
use vitrin_core::NewsletterForm;
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub enum FormAction {
    Input(String),
    Submit,
}

#[derive(Clone, Default, PartialEq)]
pub struct FormState(pub NewsletterForm);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Input(value) => form.set_email(value),
            FormAction::Submit => {
                if let Err(err) = form.submit() {
                    log::debug!("newsletter sign-up rejected: {err}");
                }
            }
        }
        Rc::new(Self(form))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or(AttrValue::Static("#"))]
    pub privacy_href: AttrValue,
}

/// E-mail sign-up; nothing is sent anywhere, a valid address just resets the field.
#[function_component(NewsletterSignup)]
pub fn newsletter_signup(p: &Props) -> Html {
    let state = use_reducer(FormState::default);

    let on_input = {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            state.dispatch(FormAction::Input(input.value()));
        })
    };
    let on_submit = {
        let state = state.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            state.dispatch(FormAction::Submit);
        })
    };
    let form = &state.0;

    html! {
        <div class="newsletter">
            <h3 class="text-base font-semibold">{ "Bülten" }</h3>
            <p class="mt-3 text-sm text-neutral-600">{ "Yeni sezon, kampanyalar ve duyurular için e-posta bırakın." }</p>
            <form class="mt-4 flex gap-2" onsubmit={on_submit} novalidate=true>
                <label for="newsletter-email" class="sr-only">{ "E-posta" }</label>
                <input
                    id="newsletter-email"
                    type="email"
                    required=true
                    placeholder="ornek@mail.com"
                    value={form.email().to_string()}
                    oninput={on_input}
                    aria-invalid={aria_bool(form.last_error().is_some())}
                    class="w-full rounded-full border border-neutral-300 px-4 py-2 text-sm outline-none transition focus:border-neutral-900"
                />
                <button
                    type="submit"
                    class="shrink-0 rounded-full border border-neutral-900 px-4 py-2 text-sm font-medium transition hover:bg-neutral-900 hover:text-white"
                >
                    { "Abone Ol" }
                </button>
            </form>
            if let Some(err) = form.last_error() {
                <p class="newsletter-error mt-2 text-xs text-red-600" role="alert">{ err.hint() }</p>
            }
            if form.is_subscribed() {
                <p class="newsletter-ok mt-2 text-xs text-green-700" role="status">{ "Teşekkürler! Bültene kaydoldunuz." }</p>
            }
            <p class="mt-2 text-xs text-neutral-500">
                { "Abone olarak " }
                <a href={p.privacy_href.clone()} class="underline hover:no-underline">{ "Gizlilik Politikası" }</a>
                { "’nı kabul etmiş olursunuz." }
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<FormState>, action: FormAction) -> Rc<FormState> {
        state.reduce(action)
    }

    #[test]
    fn valid_submit_clears_and_confirms() {
        let state = Rc::new(FormState::default());
        let state = apply(state, FormAction::Input("ornek@mail.com".to_string()));
        let state = apply(state, FormAction::Submit);
        assert_eq!(state.0.email(), "");
        assert!(state.0.is_subscribed());
    }

    #[test]
    fn invalid_submit_keeps_value_and_error() {
        let state = Rc::new(FormState::default());
        let state = apply(state, FormAction::Input("ornek".to_string()));
        let state = apply(state, FormAction::Submit);
        assert_eq!(state.0.email(), "ornek");
        assert!(state.0.last_error().is_some());
        let state = apply(state, FormAction::Input("ornek@".to_string()));
        assert!(state.0.last_error().is_none());
    }

    #[test]
    fn first_render_has_no_feedback() {
        use futures::executor::block_on;
        use yew::LocalServerRenderer;

        let html = block_on(LocalServerRenderer::<NewsletterSignup>::new().render());
        assert!(html.contains("placeholder=\"ornek@mail.com\""));
        assert!(!html.contains("newsletter-error"));
        assert!(!html.contains("newsletter-ok"));
    }
}
