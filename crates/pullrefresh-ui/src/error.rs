/// Setup mistakes. Reported synchronously and never retried.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// A view was registered without a refresh listener.
    MissingRefreshListener,
    /// No probe was given and none of the registered predicates matched.
    UnresolvedProbe,
    /// The host could not inflate the configured header layout.
    MissingHeaderLayout { layout: String },
    /// The host surface already carries a pull-to-refresh header.
    DuplicateAttacher,
    /// Scroll distance must be within (0.0, 1.0].
    InvalidScrollDistance(f32),
}

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationError::MissingRefreshListener => {
                write!(f, "refreshable view registered without a refresh listener")
            }
            ConfigurationError::UnresolvedProbe => {
                write!(f, "no scroll position probe matches the view")
            }
            ConfigurationError::MissingHeaderLayout { layout } => {
                write!(f, "header layout {layout:?} could not be inflated")
            }
            ConfigurationError::DuplicateAttacher => {
                write!(f, "host surface already has a pull-to-refresh header installed")
            }
            ConfigurationError::InvalidScrollDistance(distance) => {
                write!(f, "scroll distance {distance} outside (0.0, 1.0]")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Transition the attacher's state machine never makes. Seeing one is a bug
/// in this crate, not in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateViolation {
    ThresholdCrossedWhileRefreshing,
    MinimizeOutsideRefresh,
}

impl std::fmt::Display for StateViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateViolation::ThresholdCrossedWhileRefreshing => {
                write!(f, "pull threshold crossed while a refresh is running")
            }
            StateViolation::MinimizeOutsideRefresh => {
                write!(f, "minimize timer fired with no refresh running")
            }
        }
    }
}

impl StateViolation {
    pub(crate) fn report(self) {
        log::error!("state violation: {self}");
        debug_assert!(false, "state violation: {self}");
    }
}
