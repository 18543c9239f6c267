use crate::errors::PathPlannerError;
use super::{
    RecordMap,
    config::AStarConfig,
    node::SearchNode,
    open_list::{OpenList, SearchRecord},
    shortest_path::{PathIter, shortest_path},
};

use indexmap::map::Entry::{Occupied, Vacant};
use tracing::{debug, trace};


/// Outcome of a single `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AStarResult {
    Working, // Node expanded, more work to do
    Found, // Goal reached, path available through traverse_from_goal
    Failed, // Open list exhausted or step budget used up
}

/// Where a search instance is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Uninitialized, // No setup yet
    Ready, // Set up, no step taken
    Working,
    Found,
    Failed,
}

impl SearchState {
    /// Found and Failed are only left through a new setup
    pub fn is_terminal(&self) -> bool {
        matches!(self, SearchState::Found | SearchState::Failed)
    }
}

impl From<AStarResult> for SearchState {
    fn from(result: AStarResult) -> Self {
        match result {
            AStarResult::Working => SearchState::Working,
            AStarResult::Found => SearchState::Found,
            AStarResult::Failed => SearchState::Failed,
        }
    }
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The search is incremental: `setup` prepares it and each `step` expands one node,
/// so a caller can spread a long search over several frames or ticks.
/// The approach has 2 requirements for an optimal path:
/// 1. The heuristic function must be admissible (never overestimates the true cost to reach the goal)
/// 2. Traversal costs are non-negative
pub struct AStar<N: SearchNode> {
    config: AStarConfig,

    // Every node reached so far, the map index is the record id used for parent links
    records: RecordMap<N, N::Cost>,

    // Nodes that need to be evaluated, sorted by total cost
    open_list: OpenList<N::Cost>,

    start: Option<N>,
    goal: Option<N>,
    goal_index: Option<usize>, // record of the node that satisfied the goal test
    state: SearchState,
    steps: usize, // step calls that consumed budget
    expansions: usize, // nodes whose neighbors were processed
}

impl<N: SearchNode> Default for AStar<N> {
    fn default() -> Self {
        Self::with_config(AStarConfig::default())
    }
}

impl<N: SearchNode> AStar<N> {

    /// New search with the default step budget
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AStarConfig) -> Self {
        Self {
            config,
            records: RecordMap::default(),
            open_list: OpenList::new(),
            start: None,
            goal: None,
            goal_index: None,
            state: SearchState::Uninitialized,
            steps: 0,
            expansions: 0,
        }
    }

    /// Discard any previous search and prepare a new one from `start` to `goal`
    pub fn setup(&mut self, start: N, goal: N) {
        self.records.clear();
        self.open_list.clear();
        self.goal_index = None;
        self.steps = 0;
        self.expansions = 0;

        // start record: g = 0, f = h
        let mut record = SearchRecord::start(start.heuristic(&goal));
        self.open_list.push(self.records.len(), &mut record);
        self.records.insert(start.clone(), record);

        debug!(?start, ?goal, max_steps = ?self.config.max_steps, "A* search set up");

        self.start = Some(start);
        self.goal = Some(goal);
        self.state = SearchState::Ready;
    }

    /// Run a fresh search until it finds the goal or fails
    pub fn run_to_completion(&mut self, start: N, goal: N) -> AStarResult {
        self.setup(start, goal);
        loop {
            let result = self.advance();
            if result != AStarResult::Working {
                return result;
            }
        }
    }

    /// Expand the most promising open node
    /// Once Found or Failed is returned, further calls return the same result until the next setup
    pub fn step(&mut self) -> Result<AStarResult, PathPlannerError> {
        if self.state == SearchState::Uninitialized {
            return Err(PathPlannerError::SearchNotStarted);
        }
        Ok(self.advance())
    }

    /// Run a fresh search and return the path ordered from start to goal
    pub fn plan(&mut self, start: N, goal: N) -> Result<Vec<N>, PathPlannerError> {
        match self.run_to_completion(start, goal) {
            AStarResult::Found => {
                let goal_index = self.goal_index.ok_or(PathPlannerError::GoalNotReached)?;
                Ok(shortest_path(&self.records, goal_index))
            }
            _ => Err(PathPlannerError::NoPathFound),
        }
    }

    /// Path from the found goal back to the start, goal first
    /// Only available after a step returned Found, can be called repeatedly
    pub fn traverse_from_goal(&self) -> Result<PathIter<'_, N, N::Cost>, PathPlannerError> {
        match (self.state, self.goal_index) {
            (SearchState::Found, Some(goal_index)) => Ok(PathIter::new(&self.records, goal_index)),
            _ => Err(PathPlannerError::GoalNotReached),
        }
    }

    pub fn config(&self) -> &AStarConfig {
        &self.config
    }

    pub fn start(&self) -> Option<&N> {
        self.start.as_ref()
    }

    pub fn goal(&self) -> Option<&N> {
        self.goal.as_ref()
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Steps taken since setup, counted against the step budget
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Nodes expanded since setup, the goal itself is never expanded
    pub fn expansions(&self) -> usize {
        self.expansions
    }

    /// Number of nodes currently on the open list
    pub fn open_len(&self) -> usize {
        self.open_list.len()
    }

    /// Number of distinct nodes reached since setup
    pub fn visited_len(&self) -> usize {
        self.records.len()
    }

    /// Best known cost from the start to `node`, None if it was never reached
    pub fn given_cost(&self, node: &N) -> Option<N::Cost> {
        self.records.get(node).map(|record| record.given_cost)
    }

    /// Cost of the found path
    pub fn path_cost(&self) -> Option<N::Cost> {
        match self.state {
            SearchState::Found => self.goal_index
                .and_then(|index| self.records.get_index(index))
                .map(|(_, record)| record.given_cost),
            _ => None,
        }
    }

    /// True while `node` is on the open list
    pub fn is_open(&self, node: &N) -> bool {
        self.records.get(node).is_some_and(|record| record.open)
    }

    /// True once `node` has been taken off the open list
    pub fn is_closed(&self, node: &N) -> bool {
        self.records.get(node).is_some_and(|record| record.closed)
    }

    /// Step a search that has been set up
    fn advance(&mut self) -> AStarResult {
        let result = match self.state {
            SearchState::Uninitialized | SearchState::Failed => AStarResult::Failed,
            SearchState::Found => AStarResult::Found,
            SearchState::Ready | SearchState::Working => self.expand_next(),
        };
        self.state = result.into();
        result
    }

    /// Pop the cheapest open node, test it against the goal and relax its neighbors
    fn expand_next(&mut self) -> AStarResult {
        let Some(goal) = self.goal.as_ref() else {
            return AStarResult::Failed;
        };

        if self.config.budget_exhausted(self.steps) {
            debug!(steps = self.steps, visited = self.records.len(), "A* step budget exhausted");
            return AStarResult::Failed;
        }
        self.steps += 1;

        let Some(parent_index) = self.open_list.pop(&mut self.records) else {
            debug!(steps = self.steps, visited = self.records.len(), "A* open list exhausted, no path");
            return AStarResult::Failed;
        };
        let Some((parent, parent_record)) = self.records.get_index(parent_index) else {
            return AStarResult::Failed;
        };

        // Check if we've reached the goal
        if parent.equivalent(goal) {
            debug!(
                node = ?parent,
                cost = ?parent_record.given_cost,
                steps = self.steps,
                expansions = self.expansions,
                "A* goal found"
            );
            self.goal_index = Some(parent_index);
            return AStarResult::Found;
        }

        let parent = parent.clone();
        let parent_cost = parent_record.given_cost;
        self.expansions += 1;
        trace!(node = ?parent, cost = ?parent_cost, open = self.open_list.len(), "A* expanding");

        // loop over neighbors, absent entries are skipped
        for child in parent.neighbors().into_iter().flatten() {

            // new cost to reach the child through parent
            let cost = parent_cost + child.traversal_cost(&parent);

            match self.records.entry(child) {
                Occupied(mut e) => {
                    let index = e.index();

                    // The existing path is at least as good, do nothing
                    if e.get().given_cost <= cost {
                        continue;
                    }

                    // Better path: keep the heuristic from discovery, only g changes
                    if e.get().closed {
                        trace!(node = ?e.key(), old = ?e.get().given_cost, new = ?cost, "A* reopening");
                    }
                    let record = e.get_mut();
                    record.parent = Some(parent_index);
                    record.given_cost = cost;
                    record.total_cost = cost + record.heuristic;
                    self.open_list.push(index, record);
                }
                Vacant(e) => {
                    // This is the first time we're seeing this node
                    let heuristic = e.key().heuristic(goal);
                    let mut record = SearchRecord::discovered(Some(parent_index), cost, heuristic);
                    self.open_list.push(e.index(), &mut record);
                    e.insert(record);
                }
            }
        }

        AStarResult::Working
    }
}
