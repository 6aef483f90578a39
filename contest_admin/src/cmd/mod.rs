pub mod certificates;
pub mod validate;

use clap::ValueEnum;
use std::fmt;

#[derive(Debug, ValueEnum, Clone, PartialEq, Eq)]
pub enum TargetDomain {
    Round,
    Contest,
}

impl fmt::Display for TargetDomain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TargetDomain::Round => write!(f, "round"),
            TargetDomain::Contest => write!(f, "contest"),
        }
    }
}
