use encodeflow_core::{Error, Result};

use super::types::{CloudConfig, Node};

const ACTIVE: &str = "active";

/// Number of worker nodes whose status is exactly `active`.
///
/// Management nodes never count, whatever their status.
pub fn active_workers(nodes: &[Node]) -> usize {
    nodes
        .iter()
        .filter(|node| node.product.is_worker() && node.status == ACTIVE)
        .count()
}

/// Check a node inventory against the cluster's minimum-active-worker policy.
pub fn check_capacity(cloud_config: &CloudConfig, nodes: &[Node]) -> Result<()> {
    let found = active_workers(nodes);
    if found < cloud_config.min_nodes {
        return Err(Error::NotEnoughNodes {
            required: cloud_config.min_nodes,
            found,
        });
    }
    Ok(())
}
