use crate::{
    components::ui::{ArrowIcon, Spinner},
    features::signup::SignupController,
};
use leptos::{html::Input, prelude::*};
use signup_flow::{Event, FlowView};

#[component]
pub fn EmailForm(controller: SignupController, model: Memo<FlowView>) -> impl IntoView {
    let input = NodeRef::<Input>::new();
    let busy = move || model.with(|view| view.busy);

    Effect::new(move |_| {
        if let Some(element) = input.get() {
            if let Err(err) = element.focus() {
                leptos::logging::debug_warn!("focus failed: {err:?}");
            }
        }
    });

    view! {
        <form
            class="flex h-[60px] w-full items-center rounded-[32px] bg-white/5 px-2 shadow-[0_0_0_1px_rgba(255,255,255,0.1)]"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                controller.dispatch(Event::SubmitEmail);
            }
        >
            <input
                node_ref=input
                type="email"
                autocomplete="email"
                placeholder="enter your email"
                class="min-w-0 flex-1 border-none bg-transparent px-4 text-lg text-white placeholder-neutral-600 outline-none focus:ring-0"
                prop:value=move || model.with(|view| view.email.clone())
                disabled=busy
                on:input=move |ev| controller.dispatch(Event::EmailChanged(event_target_value(&ev)))
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        controller.dispatch(Event::Cancel);
                    }
                }
            />
            <button
                type="submit"
                aria-label="Send code"
                class="flex-shrink-0 rounded-full bg-white p-2 text-black transition-colors hover:bg-neutral-200 disabled:cursor-not-allowed disabled:opacity-50"
                disabled=busy
            >
                {move || {
                    if busy() {
                        view! { <Spinner /> }.into_any()
                    } else {
                        view! { <ArrowIcon class="h-5 w-5" /> }.into_any()
                    }
                }}
            </button>
        </form>
    }
}
