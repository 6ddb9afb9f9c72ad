use crate::node::NodeId;

/// What a balancing policy did when asked to remove a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RemoveResult {
    /// The value wasn't found so nothing was removed.
    NotFound,
    /// The node holding the value was unlinked from the tree. It is fully detached but still
    /// allocated, so the tree can free it and take its value. `replacement` is the node that
    /// now sits where it used to be, if any.
    Detached {
        removed: NodeId,
        replacement: Option<NodeId>,
    },
}
