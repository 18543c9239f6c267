use super::RecordMap;


/// Walks parent links from the goal record back to the start
/// Yields the goal first and the start last
#[derive(Debug, Clone)]
pub struct PathIter<'a, N, C> {
    records: &'a RecordMap<N, C>,
    next: Option<usize>,
}

impl<'a, N, C> PathIter<'a, N, C> {
    pub(crate) fn new(records: &'a RecordMap<N, C>, goal_index: usize) -> Self {
        Self { records, next: Some(goal_index) }
    }
}

impl<'a, N, C> Iterator for PathIter<'a, N, C> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, record) = self.records.get_index(self.next?)?;
        // the start record is the only one reached without a parent
        self.next = record.parent;
        Some(node)
    }
}


/// Construct the shortest path from the goal node to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// records: RecordMap<N, C> - arena of search records keyed by node
/// goal_index: usize - index of the goal node in the records
pub(crate) fn shortest_path<N, C>(records: &RecordMap<N, C>, goal_index: usize) -> Vec<N>
where
    N: Clone,
{
    let mut path: Vec<N> = PathIter::new(records, goal_index).cloned().collect();

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph_algos::open_list::SearchRecord;

    #[test]
    fn test_path_reconstruction() {
        // Build the records manually: A -> C -> D, with B a dead branch off A
        let mut records: RecordMap<&'static str, u32> = RecordMap::default();

        let a_index = records.insert_full("A", SearchRecord::start(0)).0;
        let b_index = records.insert_full("B", SearchRecord::discovered(Some(a_index), 1, 0)).0;
        let c_index = records.insert_full("C", SearchRecord::discovered(Some(a_index), 3, 0)).0;
        let d_index = records.insert_full("D", SearchRecord::discovered(Some(c_index), 4, 0)).0;

        let walked: Vec<_> = PathIter::new(&records, d_index).copied().collect();
        assert_eq!(walked, vec!["D", "C", "A"]);

        assert_eq!(shortest_path(&records, d_index), vec!["A", "C", "D"]);
        assert_eq!(shortest_path(&records, b_index), vec!["A", "B"]);
    }

    #[test]
    fn test_path_of_start_only() {
        let mut records: RecordMap<&'static str, u32> = RecordMap::default();
        let a_index = records.insert_full("A", SearchRecord::start(7)).0;

        assert_eq!(PathIter::new(&records, a_index).count(), 1);
        assert_eq!(shortest_path(&records, a_index), vec!["A"]);
    }

    #[test]
    fn test_iterator_can_be_cloned_and_rewalked() {
        let mut records: RecordMap<&'static str, u32> = RecordMap::default();
        let a_index = records.insert_full("A", SearchRecord::start(0)).0;
        let b_index = records.insert_full("B", SearchRecord::discovered(Some(a_index), 2, 0)).0;

        let path = PathIter::new(&records, b_index);
        let first: Vec<_> = path.clone().collect();
        let second: Vec<_> = path.collect();
        assert_eq!(first, second);
    }
}
