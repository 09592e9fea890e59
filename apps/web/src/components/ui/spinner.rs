use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div
            class="inline-block h-5 w-5 animate-spin rounded-full border-2 border-neutral-300 border-t-black"
            role="status"
            aria-live="polite"
            aria-label="Loading"
        ></div>
    }
}
