//! Tool capability groups.

mod note;
mod problem;
mod solution;
mod user;

pub use note::NoteTools;
pub use problem::ProblemTools;
pub use solution::SolutionTools;
pub use user::UserTools;
