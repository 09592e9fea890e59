//! Minimal 404 for unknown client-side routes.

use crate::components::Footer;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="relative flex min-h-screen flex-col items-center justify-center bg-black px-4 text-center">
            <h1 class="select-none text-9xl font-black text-neutral-900">"404"</h1>
            <p class="mt-4 max-w-sm text-neutral-500">"Nothing lives here. Just text."</p>
            <A
                href="/"
                {..}
                class="mt-8 inline-flex items-center rounded-full bg-white px-6 py-3 text-sm font-medium text-black transition-colors hover:bg-neutral-200"
            >
                "Back to MNKY"
            </A>
            <Footer />
        </main>
    }
}
