use thiserror::Error;


/// Errors raised by the path planners
/// A search that simply fails to reach the goal is reported through `AStarResult::Failed`,
/// these are reserved for misuse of the planner and for the `plan` convenience
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathPlannerError {
    #[error("no path found between start and goal")]
    NoPathFound, // Open list exhausted or step budget hit

    #[error("search has not been set up, call setup() first")]
    SearchNotStarted, // step() called before setup()

    #[error("goal has not been reached, path is unavailable")]
    GoalNotReached, // traverse requested without a Found result
}
