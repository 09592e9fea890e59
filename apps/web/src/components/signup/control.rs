use super::{email_form::EmailForm, notice::NoticeLine, otp_form::OtpForm};
use crate::{components::ui::ArrowIcon, features::signup::SignupController};
use leptos::prelude::*;
use signup_flow::{Affordance, Event};

#[component]
pub fn SignupControl() -> impl IntoView {
    let controller = SignupController::mount();
    let model = Memo::new(move |_| controller.view());
    // Swapping the slot only on affordance changes keeps focus inside the forms.
    let affordance = Memo::new(move |_| model.with(|view| view.affordance));

    view! {
        <div class="relative mx-auto w-full max-w-md">
            <div class="relative z-20 flex h-16 items-center justify-center">
                {move || match affordance.get() {
                    Affordance::Confirmation => view! { <Confirmation /> }.into_any(),
                    Affordance::Button => {
                        view! {
                            <button
                                type="button"
                                class="inline-flex h-[60px] w-[260px] items-center justify-center gap-3 rounded-full bg-white font-medium text-black shadow-[0_0_20px_-5px_rgba(255,255,255,0.3),0_20px_40px_-15px_rgba(255,255,255,0.2)] transition-colors hover:bg-neutral-200"
                                on:click=move |_| controller.dispatch(Event::Activate)
                            >
                                "Request Early Access"
                                <ArrowIcon />
                            </button>
                        }
                            .into_any()
                    }
                    Affordance::EmailForm => view! { <EmailForm controller=controller model=model /> }.into_any(),
                    Affordance::OtpForm => view! { <OtpForm controller=controller model=model /> }.into_any(),
                }}
            </div>
            <div class="absolute left-0 top-full z-10 w-full">
                {move || {
                    model.with(|view| view.notice.clone()).map(|notice| view! { <NoticeLine notice=notice /> })
                }}
            </div>
        </div>
    }
}

#[component]
fn Confirmation() -> impl IntoView {
    view! {
        <div class="inline-flex w-full max-w-[300px] cursor-default items-center justify-center rounded-full bg-white px-8 py-4 text-center text-sm font-medium leading-relaxed text-black">
            "You are signed up for updates."
        </div>
    }
}
