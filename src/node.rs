/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
This allows us to (1) save space by not using `usize` or `u64` and (2) directly use node values
as indices into per-node arrays without abstracting over them.

Every node additionally carries a scalar [`NodeValue`] that is owned by the graph and is not
interpreted by any algorithm in this crate.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// General-purpose scalar attached to every node
pub type NodeValue = f64;

/// Value every node is initialized with
pub const DEFAULT_NODE_VALUE: NodeValue = 0.0;
