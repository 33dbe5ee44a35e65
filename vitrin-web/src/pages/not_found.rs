use yew::prelude::*;

/// Shown for any path the router does not know.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <main class="not-found container mx-auto flex min-h-[60vh] flex-col items-center justify-center gap-4 px-4 text-center" aria-live="assertive">
            <h1 class="text-3xl font-semibold">{ "Sayfa bulunamadı" }</h1>
            <p class="text-sm text-neutral-600">{ "Aradığınız sayfa taşınmış ya da hiç var olmamış olabilir." }</p>
            <a href="/" class="inline-flex items-center rounded-full border border-neutral-900 px-5 py-2 text-sm font-medium transition hover:bg-neutral-900 hover:text-white">
                { "Anasayfaya Dön" }
            </a>
        </main>
    }
}
