//! Resource capability groups.

mod problem;
mod solution;

pub use problem::ProblemResources;
pub use solution::SolutionResources;
