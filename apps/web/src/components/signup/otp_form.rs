use crate::features::signup::SignupController;
use leptos::prelude::*;
use signup_flow::{Event, FlowView, OTP_LENGTH};

const CELL_CLASS: &str = "h-12 w-12 rounded-xl border bg-white/5 text-center text-xl text-white shadow-lg backdrop-blur-sm transition-all focus:bg-white/10 focus:outline-none";

#[component]
pub fn OtpForm(controller: SignupController, model: Memo<FlowView>) -> impl IntoView {
    let shake = move || model.with(|view| view.shake);

    view! {
        <form
            class="flex w-full items-center justify-center gap-3"
            class:mnky-shake=shake
            on:submit=move |ev| {
                ev.prevent_default();
                controller.dispatch(Event::SubmitCode);
            }
        >
            {(0..OTP_LENGTH)
                .map(|index| view! { <OtpCell controller=controller model=model index=index /> })
                .collect_view()}
        </form>
    }
}

#[component]
fn OtpCell(controller: SignupController, model: Memo<FlowView>, index: usize) -> impl IntoView {
    let node = controller.cell(index);
    let class = move || {
        if model.with(|view| view.shake) {
            format!("{CELL_CLASS} border-red-500/50 focus:border-red-500/50")
        } else {
            format!("{CELL_CLASS} border-white/10 focus:border-white/40")
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        controller.dispatch(Event::DigitInput {
            index,
            value: event_target_value(&ev),
        });
        // A rejected keystroke leaves the model unchanged, so the bound value
        // would not re-render; restore the element by hand.
        if let Some(element) = node.get_untracked() {
            let expected = controller.view_untracked().digit_text(index);
            if element.value() != expected {
                element.set_value(&expected);
            }
        }
    };

    view! {
        <input
            node_ref=node
            type="text"
            inputmode="numeric"
            autocomplete="one-time-code"
            maxlength="1"
            aria-label=format!("Digit {}", index + 1)
            class=class
            prop:value=move || model.with(|view| view.digit_text(index))
            readonly=move || model.with(|view| view.busy)
            on:focus=move |_| controller.dispatch(Event::CellFocused(index))
            on:input=on_input
            on:keydown=move |ev| match ev.key().as_str() {
                "Backspace" => controller.dispatch(Event::Backspace { index }),
                "Escape" => controller.dispatch(Event::Cancel),
                _ => {}
            }
        />
    }
}
