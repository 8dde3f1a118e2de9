mod presenter;
mod transformer;

pub use presenter::{HeaderPresenter, HeaderViewListener, HeaderVisualState};
pub use transformer::{
    DefaultHeaderTransformer, HeaderContent, HeaderLabel, HeaderStyle, HeaderTransformer,
    Progress,
};

/// Opaque handle to the header view the host inflated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeaderViewId(pub u64);
