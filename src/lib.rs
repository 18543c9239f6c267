//! Incremental A* search over caller-defined graph nodes.
//!
//! Implement [`SearchNode`] for your node type, then drive an [`AStar`] either
//! one [`AStar::step`] at a time or through [`AStar::run_to_completion`].

mod collections;
pub mod errors;
pub mod graph_algos;

pub use errors::PathPlannerError;
pub use graph_algos::{
    a_star::{AStar, AStarResult, SearchState},
    config::{AStarConfig, DEFAULT_MAX_STEPS},
    node::SearchNode,
    shortest_path::PathIter,
};
