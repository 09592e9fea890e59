//! Landing page: hero copy, the early-access control and the footer.

use crate::components::{Footer, Hero};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="relative min-h-screen overflow-hidden bg-black selection:bg-white/20">
            <div class="relative z-10">
                <Hero />
                <Footer />
            </div>
        </main>
    }
}
