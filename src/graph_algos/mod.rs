pub mod a_star;
pub mod config;
pub mod node;
mod open_list;
pub mod shortest_path;

use crate::collections::FxIndexMap;
use open_list::SearchRecord;

/// Type alias for the record arena used by the search
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The map index of a node is its record id, parents are stored as record ids
pub(crate) type RecordMap<N, C> = FxIndexMap<N, SearchRecord<C>>;
