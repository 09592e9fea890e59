//! One-shot timers keyed to the transition that armed them.
//!
//! The flow keeps at most one timer armed. Arming bumps a generation counter
//! and hands the host a [`TimerTicket`]; any later transition disarms it and
//! asks the host to cancel. A ticket that fires after being disarmed no
//! longer matches and is dropped, so a host that cannot cancel stays correct.

use std::time::Duration;

/// How long an error message stays up before the form is editable again.
pub const ERROR_DISMISS_DELAY: Duration = Duration::from_millis(3000);
/// How long rejected digits stay visible before they are cleared.
pub const DIGIT_CLEAR_DELAY: Duration = Duration::from_millis(1000);
/// Success message time before the container collapses.
pub const COLLAPSE_DELAY: Duration = Duration::from_millis(2000);
/// Time after collapsing before the confirmation replaces the control.
pub const RESET_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    DismissError,
    ClearDigits,
    Collapse,
    Reset,
}

impl TimerKind {
    #[must_use]
    pub const fn delay(self) -> Duration {
        match self {
            Self::DismissError => ERROR_DISMISS_DELAY,
            Self::ClearDigits => DIGIT_CLEAR_DELAY,
            Self::Collapse => COLLAPSE_DELAY,
            Self::Reset => RESET_DELAY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    kind: TimerKind,
    generation: u64,
}

impl TimerTicket {
    #[must_use]
    pub const fn kind(self) -> TimerKind {
        self.kind
    }

    #[must_use]
    pub const fn delay(self) -> Duration {
        self.kind.delay()
    }

    #[must_use]
    pub const fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Timers {
    generation: u64,
    armed: Option<TimerTicket>,
}

impl Timers {
    /// Arms a new timer. Returns the ticket to schedule and the one it replaced.
    pub(crate) fn arm(&mut self, kind: TimerKind) -> (TimerTicket, Option<TimerTicket>) {
        self.generation = self.generation.wrapping_add(1);
        let ticket = TimerTicket {
            kind,
            generation: self.generation,
        };
        (ticket, self.armed.replace(ticket))
    }

    /// Disarms whatever is armed and returns it so the host can cancel it.
    pub(crate) fn disarm(&mut self) -> Option<TimerTicket> {
        self.armed.take()
    }

    /// Consumes `ticket` if it is the armed one.
    pub(crate) fn fire(&mut self, ticket: TimerTicket) -> bool {
        if self.armed == Some(ticket) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn armed(&self) -> Option<TimerTicket> {
        self.armed
    }
}
