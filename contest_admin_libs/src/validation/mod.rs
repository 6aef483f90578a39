pub mod contest;
pub mod round;

pub use contest::{validate_contest, ContestInput};
pub use round::{validate_round, RoundInput};

/// A form value counts as blank when it is absent or only whitespace.
fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |value| value.trim().is_empty())
}
