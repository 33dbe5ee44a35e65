use crate::pages::{HomePage, NotFound};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/404")]
    #[not_found]
    NotFound,
}

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::NotFound.to_path(), "/404");
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/urun/4"), Some(Route::NotFound));
    }
}
