//! Node-to-community assignments

use crate::graph::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered mapping from node to integer community id.
///
/// Iteration follows insertion order, which decides the order communities are
/// reported in by [`communities`](Partition::communities) and by the density metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<(NodeId, usize)>", into = "Vec<(NodeId, usize)>")]
pub struct Partition {
    entries: Vec<(NodeId, usize)>,
    positions: HashMap<NodeId, usize>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign sequential ids (0, 1, 2, ...) to communities in the given order
    pub fn from_communities<C, I>(communities: C) -> Self
    where
        C: IntoIterator<Item = I>,
        I: IntoIterator<Item = NodeId>,
    {
        let mut partition = Self::new();
        for (cid, members) in communities.into_iter().enumerate() {
            for node in members {
                partition.insert(node, cid);
            }
        }
        partition
    }

    /// Assign `node` to `community`, returning its previous community.
    ///
    /// Reassigning a node keeps its original position.
    pub fn insert(&mut self, node: NodeId, community: usize) -> Option<usize> {
        if let Some(&pos) = self.positions.get(&node) {
            let previous = self.entries[pos].1;
            self.entries[pos].1 = community;
            return Some(previous);
        }

        self.positions.insert(node.clone(), self.entries.len());
        self.entries.push((node, community));
        None
    }

    pub fn get(&self, node: &NodeId) -> Option<usize> {
        self.positions.get(node).map(|&pos| self.entries[pos].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, usize)> + '_ {
        self.entries.iter().map(|(node, cid)| (node, *cid))
    }

    /// Number of distinct community ids
    pub fn community_count(&self) -> usize {
        self.communities().len()
    }

    /// Members grouped by community id, communities in order of first encounter
    pub fn communities(&self) -> Vec<(usize, Vec<&NodeId>)> {
        let mut slot_of: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<(usize, Vec<&NodeId>)> = Vec::new();

        for (node, cid) in self.iter() {
            let slot = *slot_of.entry(cid).or_insert_with(|| {
                groups.push((cid, Vec::new()));
                groups.len() - 1
            });
            groups[slot].1.push(node);
        }

        groups
    }
}

impl FromIterator<(NodeId, usize)> for Partition {
    fn from_iter<T: IntoIterator<Item = (NodeId, usize)>>(iter: T) -> Self {
        let mut partition = Self::new();
        for (node, cid) in iter {
            partition.insert(node, cid);
        }
        partition
    }
}

impl From<Vec<(NodeId, usize)>> for Partition {
    fn from(entries: Vec<(NodeId, usize)>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Partition> for Vec<(NodeId, usize)> {
    fn from(partition: Partition) -> Self {
        partition.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_communities_follow_first_encounter() {
        let partition: Partition = vec![
            (NodeId::from("a"), 7),
            (NodeId::from("b"), 2),
            (NodeId::from("c"), 7),
            (NodeId::from("d"), 0),
        ]
        .into();

        let groups = partition.communities();
        let ids: Vec<usize> = groups.iter().map(|(cid, _)| *cid).collect();
        assert_eq!(ids, vec![7, 2, 0]);
        assert_eq!(groups[0].1, vec![&NodeId::from("a"), &NodeId::from("c")]);
        assert_eq!(partition.community_count(), 3);
    }

    #[test]
    fn test_reassignment_keeps_position() {
        let mut partition = Partition::new();
        assert_eq!(partition.insert("a".into(), 0), None);
        partition.insert("b".into(), 1);
        assert_eq!(partition.insert("a".into(), 5), Some(0));

        let entries: Vec<(String, usize)> = partition.iter().map(|(n, c)| (n.to_string(), c)).collect();
        assert_eq!(entries, vec![("a".to_string(), 5), ("b".to_string(), 1)]);
        assert_eq!(partition.len(), 2);
    }

    #[test]
    fn test_from_communities_is_sequential() {
        let partition = Partition::from_communities(vec![
            vec![NodeId::Int(3), NodeId::Int(4)],
            vec![NodeId::Int(1)],
        ]);
        assert_eq!(partition.get(&NodeId::Int(3)), Some(0));
        assert_eq!(partition.get(&NodeId::Int(4)), Some(0));
        assert_eq!(partition.get(&NodeId::Int(1)), Some(1));
        assert_eq!(partition.get(&NodeId::Int(2)), None);
    }

    #[test]
    fn test_serializes_as_pairs() {
        let partition = Partition::from_communities(vec![vec![NodeId::from("x")], vec![NodeId::Int(2)]]);
        let json = serde_json::to_string(&partition).unwrap();
        assert_eq!(json, r#"[["x",0],[2,1]]"#);

        let back: Partition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, partition);
    }
}
