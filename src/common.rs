use std::cmp::Ordering;

// Grid coordinate as (row, column).
pub type Position = (usize, usize);

// Positions from start to target inclusive.
pub type Path = Vec<Position>;

// Open list entry. The ordering is the frontier comparator: ascending
// f cost, then descending g cost, then position order. The position tier
// keeps equal-cost entries distinct in a BTreeSet and fixes which
// equal-cost path wins: same f and g, smaller (row, column) pops first.
#[derive(Clone, Eq, PartialEq, Debug)]
pub(crate) struct OpenNode {
    pub(crate) position: Position,
    pub(crate) f_cost: usize,
    pub(crate) g_cost: usize,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .cmp(&other.f_cost)
            // Higher g cost has higher priority.
            .then_with(|| other.g_cost.cmp(&self.g_cost))
            .then_with(|| self.position.cmp(&other.position))
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_open_node_ordering() {
        let cheap = OpenNode {
            position: (2, 2),
            f_cost: 3,
            g_cost: 1,
        };
        let deep = OpenNode {
            position: (1, 1),
            f_cost: 5,
            g_cost: 4,
        };
        let shallow = OpenNode {
            position: (0, 1),
            f_cost: 5,
            g_cost: 2,
        };

        // Lowest f first; on equal f the higher g wins.
        assert!(cheap < deep);
        assert!(deep < shallow);

        let mut open_list = BTreeSet::from([shallow.clone(), cheap.clone(), deep.clone()]);
        assert_eq!(open_list.pop_first(), Some(cheap));
        assert_eq!(open_list.pop_first(), Some(deep));
        assert_eq!(open_list.pop_first(), Some(shallow));
    }

    #[test]
    fn test_open_node_position_tie_break() {
        let left = OpenNode {
            position: (0, 1),
            f_cost: 4,
            g_cost: 2,
        };
        let right = OpenNode {
            position: (1, 0),
            f_cost: 4,
            g_cost: 2,
        };

        // Same f and g: position order decides, so the frontier stays total.
        assert!(left < right);
    }
}
