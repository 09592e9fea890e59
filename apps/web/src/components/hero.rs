use crate::components::signup::SignupControl;
use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative z-20 flex min-h-screen flex-col items-center justify-center px-4 text-center">
            <div class="pointer-events-none absolute inset-0 -z-10 flex items-center justify-center">
                <div class="h-[600px] w-[600px] rounded-full bg-white/[0.03] blur-3xl md:h-[900px] md:w-[900px]"></div>
            </div>

            <div class="mnky-rise mx-auto flex max-w-4xl flex-col items-center">
                <h2 class="mb-8 font-mono text-xs uppercase tracking-[0.3em] text-neutral-400 opacity-80 md:text-sm">
                    "The Anti-App"
                </h2>
                <h1 class="mb-8 bg-gradient-to-b from-white via-white/90 to-white/30 bg-clip-text pb-2 pr-4 text-8xl font-bold text-transparent md:text-[10rem]">
                    "MNKY"
                </h1>
                <p class="mx-auto mb-16 max-w-2xl text-balance text-lg font-light leading-relaxed text-neutral-400 md:text-2xl">
                    "Your personal productivity assistant, living exclusively in iMessage."
                    <span class="mt-2 block text-neutral-500">
                        "No new apps. No clutter. Just text."
                    </span>
                </p>

                <SignupControl />
            </div>
        </section>
    }
}
