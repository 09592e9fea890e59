use leptos::prelude::*;
use signup_flow::Notice;

#[component]
pub fn NoticeLine(notice: Notice) -> impl IntoView {
    match notice {
        Notice::Disclaimer => view! {
            <p class="mnky-rise mx-auto mt-4 max-w-xs text-xs text-neutral-500">
                "By entering your email, you agree to receive periodic updates and product news from MNKY."
            </p>
        }
        .into_any(),
        Notice::CodeSent { email } => view! {
            <p class="mt-4 font-mono text-xs tracking-wide text-neutral-400">
                "Enter the code sent to " {email}
            </p>
        }
        .into_any(),
        Notice::Verified => view! {
            <p class="mt-6 font-mono text-sm tracking-wide text-neutral-400">
                "Account verified. Welcome to MNKY."
            </p>
        }
        .into_any(),
        Notice::Error(message) => view! {
            <p class="mt-6 font-mono text-sm tracking-wide text-red-400" role="alert">
                {message}
            </p>
        }
        .into_any(),
    }
}
