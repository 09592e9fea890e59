//! Browser host for [`SignupFlow`].
//!
//! The reducer decides; this runs its commands. Gateway calls are spawned on
//! the local executor, timers are `gloo` timeouts keyed by ticket, and focus
//! moves go through the cell `NodeRef`s once the next frame has rendered.

use crate::{
    app_lib::config::AppConfig,
    features::signup::{client::SupabaseGateway, cookie::CookieStore},
};
use gloo_timers::callback::Timeout;
use leptos::{
    html::Input, leptos_dom::helpers::request_animation_frame, prelude::*, task::spawn_local,
};
use signup_flow::{perform, Command, Event, FlowView, SignupFlow, TimerTicket, OTP_LENGTH};
use std::collections::HashMap;

#[derive(Clone, Copy)]
pub(crate) struct SignupController {
    flow: RwSignal<SignupFlow<CookieStore>>,
    gateway: StoredValue<SupabaseGateway>,
    timers: StoredValue<HashMap<TimerTicket, Timeout>, LocalStorage>,
    cells: [NodeRef<Input>; OTP_LENGTH],
}

impl SignupController {
    /// Reads the marker cookie and loads the provider settings.
    pub fn mount() -> Self {
        Self {
            flow: RwSignal::new(SignupFlow::mount(CookieStore)),
            gateway: StoredValue::new(SupabaseGateway::from_config(&AppConfig::load())),
            timers: StoredValue::new_local(HashMap::new()),
            cells: std::array::from_fn(|_| NodeRef::new()),
        }
    }

    /// Tracked render model.
    pub fn view(&self) -> FlowView {
        self.flow.with(SignupFlow::view)
    }

    pub fn view_untracked(&self) -> FlowView {
        self.flow.with_untracked(SignupFlow::view)
    }

    pub fn cell(&self, index: usize) -> NodeRef<Input> {
        self.cells[index.min(OTP_LENGTH - 1)]
    }

    pub fn dispatch(self, event: Event) {
        let Some(commands) = self.flow.try_update(|flow| flow.handle(event)) else {
            return;
        };
        for command in commands {
            self.run(command);
        }
    }

    fn run(self, command: Command) {
        match command {
            Command::Gateway(call) => {
                let gateway = self.gateway.get_value();
                spawn_local(async move {
                    let event = perform(&gateway, &call).await;
                    self.dispatch(event);
                });
            }
            Command::Schedule(ticket) => {
                let millis = u32::try_from(ticket.delay().as_millis()).unwrap_or(u32::MAX);
                // The timeout must not be dropped from inside its own callback.
                let timeout = Timeout::new(millis, move || {
                    spawn_local(async move { self.fire(ticket) });
                });
                self.timers.update_value(|timers| {
                    timers.insert(ticket, timeout);
                });
            }
            Command::Cancel(ticket) => {
                // Dropping the handle clears the browser timeout.
                self.timers.update_value(|timers| {
                    timers.remove(&ticket);
                });
            }
            Command::Focus(index) => {
                let cell = self.cell(index);
                request_animation_frame(move || {
                    if let Some(input) = cell.get_untracked() {
                        if let Err(err) = input.focus() {
                            leptos::logging::debug_warn!("focus failed: {err:?}");
                        }
                    }
                });
            }
        }
    }

    fn fire(self, ticket: TimerTicket) {
        self.timers.update_value(|timers| {
            timers.remove(&ticket);
        });
        self.dispatch(Event::TimerFired(ticket));
    }
}
