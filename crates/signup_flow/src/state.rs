/// Which UI the signup control is showing. Exactly one is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Collapsed,
    EmailEntry,
    OtpEntry,
    /// A gateway call is outstanding; input is frozen until it resolves.
    Verifying(Pending),
    Verified,
    /// Transient; reverts to the carried entry state when its timer fires.
    Error(Recovery),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    CodeRequest,
    CodeCheck,
}

/// Entry state an error reverts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Recovery {
    EmailEntry,
    OtpEntry,
}

impl Recovery {
    #[must_use]
    pub const fn state(self) -> FlowState {
        match self {
            Self::EmailEntry => FlowState::EmailEntry,
            Self::OtpEntry => FlowState::OtpEntry,
        }
    }
}

impl FlowState {
    /// The email field is editable and can be submitted.
    #[must_use]
    pub const fn accepts_email(self) -> bool {
        matches!(self, Self::EmailEntry | Self::Error(Recovery::EmailEntry))
    }

    /// The user may abandon the attempt. Outstanding gateway calls cannot be
    /// cancelled, and a verified attempt is already committed.
    #[must_use]
    pub const fn is_cancellable(self) -> bool {
        matches!(self, Self::EmailEntry | Self::OtpEntry | Self::Error(_))
    }

    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Verifying(_))
    }
}
