//! Whole-network analysis report.
//!
//! One call assembles everything the presentation layer displays: counts,
//! ranked leaders with their follower sets, best followers, and the
//! shortest path between the two top leaders. The report is plain data;
//! formatting and rendering decisions stay with the caller.

use crate::error::Result;
use crate::matrix::AdjacencyMatrix;
use crate::path::shortest_path;
use crate::ranking::{find_best_followers, find_leaders, followers_of, Ranking};
use serde::{Deserialize, Serialize};
use sociogram_core::{EdgeList, NodeId};

/// A ranked leader together with everyone following it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderInfo {
    pub node: NodeId,
    pub score: usize,
    pub followers: Vec<NodeId>,
}

/// The connection attempt between the two top leaders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderPath {
    pub from: NodeId,
    pub to: NodeId,
    /// `None` when the second leader is unreachable from the first.
    pub path: Option<Vec<NodeId>>,
}

/// Complete analysis of one network snapshot.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkAnalysis {
    pub directed: bool,
    /// Distinct nodes seen in the input.
    pub node_count: usize,
    /// Edges as stored: undirected input counts both orientations.
    pub edge_count: usize,
    pub leaders: Vec<LeaderInfo>,
    pub best_followers: Ranking,
    /// Absent when fewer than two leaders were ranked.
    pub leader_path: Option<LeaderPath>,
}

impl NetworkAnalysis {
    /// Runs the full analysis over a built matrix.
    ///
    /// `leader_count` and `follower_count` bound the two rankings; both
    /// clamp to the node count.
    pub fn run(
        edge_list: &EdgeList,
        matrix: &AdjacencyMatrix,
        leader_count: usize,
        follower_count: usize,
    ) -> Result<Self> {
        let directed = edge_list.directed();

        let leader_ranking = find_leaders(matrix, directed, leader_count);
        let mut leaders = Vec::with_capacity(leader_ranking.top.len());
        for (node, score) in leader_ranking.entries() {
            leaders.push(LeaderInfo {
                node,
                score,
                followers: followers_of(matrix, node, directed)?,
            });
        }

        let best_followers = find_best_followers(matrix, follower_count);

        let leader_path = match leaders.as_slice() {
            [first, second, ..] => Some(LeaderPath {
                from: first.node,
                to: second.node,
                path: shortest_path(matrix, first.node, second.node)?,
            }),
            _ => None,
        };

        Ok(Self {
            directed,
            node_count: edge_list.node_count(),
            edge_count: edge_list.edge_count(),
            leaders,
            best_followers,
            leader_path,
        })
    }

    /// One-line report header.
    pub fn summary(&self) -> String {
        format!(
            "{} graph: {} nodes, {} edges",
            if self.directed { "directed" } else { "undirected" },
            self.node_count,
            self.edge_count
        )
    }
}

/// Data handed to an external renderer.
///
/// The engine only assembles the payload; whether it gets drawn at all
/// (for example, suppressing very large graphs) is the caller's policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderData {
    /// Node ids in ascending order.
    pub nodes: Vec<NodeId>,
    pub edges: Vec<(NodeId, NodeId)>,
    pub leaders: Vec<NodeId>,
    pub highlight_path: Option<Vec<NodeId>>,
}

impl RenderData {
    /// Assembles the payload from a snapshot and its analysis.
    pub fn new(edge_list: &EdgeList, analysis: &NetworkAnalysis) -> Self {
        Self {
            nodes: edge_list.sorted_nodes(),
            edges: edge_list.edges().to_vec(),
            leaders: analysis.leaders.iter().map(|leader| leader.node).collect(),
            highlight_path: analysis
                .leader_path
                .as_ref()
                .and_then(|leader_path| leader_path.path.clone()),
        }
    }
}
