//! Trellis Core — tech tree data model, overlay store, and merge resolver

pub mod merge;
pub mod model;
pub mod session;
pub mod store;
pub mod subtree;


#[cfg(test)]
pub mod test_utils;

pub use merge::merge;
pub use model::{
    ExpansionResponse, FundingState, NodeKind, NodePatch, Subtree, TreeData, TreeEdge, TreeNode,
};
pub use session::{EditMode, EditSession};
pub use store::{EdgePayload, GraphStore, NodePayload, StoreError};
pub use subtree::extract;
