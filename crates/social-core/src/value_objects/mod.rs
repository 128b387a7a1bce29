//! Value objects - immutable types that represent domain concepts

mod react_target;
mod reaction_type;
mod report_reason;

pub use react_target::ReactTarget;
pub use reaction_type::ReactionType;
pub use report_reason::ReportReason;
