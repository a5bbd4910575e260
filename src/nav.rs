use crate::Counter;

/// Centralizes the accessibility tree of a board window.
///
/// The tree is tiny: a window node with a single live label as its child.  The label carries the
/// status line, so a screen reader announces moves and cross-hair positions as they happen.
///
/// # Fields
///
/// * focus - The node in focus.  Always the window.
/// * ids - Owned [`Counter`] used to generate unique ids for nodes.
/// * label - Id of the status label.
/// * spoken - The last text sent to the screen reader, so we only announce changes.
/// * tree - The root tree, carrying the app name.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct Nav {
    focus: accesskit::NodeId,
    ids: Counter,
    label: accesskit::NodeId,
    spoken: String,
    tree: accesskit::Tree,
}

impl Nav {
    pub fn new(app_name: &str) -> Self {
        let mut ids = Counter::default();
        let focus = ids.node_id();
        let label = ids.node_id();
        let mut tree = accesskit::Tree::new(focus);
        tree.app_name = Some(app_name.to_string());
        tracing::trace!("App name set to {app_name}");
        Self {
            focus,
            ids,
            label,
            spoken: String::new(),
            tree,
        }
    }

    /// Returns a [`accesskit::TreeUpdate`] containing the full information for the tree.
    pub fn initial_tree(&self) -> accesskit::TreeUpdate {
        accesskit::TreeUpdate {
            nodes: vec![
                (self.focus, Self::window(vec![self.label])),
                (self.label, Self::message(&self.spoken)),
            ],
            tree: Some(self.tree.clone()),
            focus: self.focus,
        }
    }

    /// Returns an update for the status label if `text` differs from what was last spoken.
    pub fn announce(&mut self, text: &str) -> Option<accesskit::TreeUpdate> {
        if self.spoken == text {
            return None;
        }
        self.spoken = text.to_string();
        Some(accesskit::TreeUpdate {
            nodes: vec![(self.label, Self::message(text))],
            tree: None,
            focus: self.focus,
        })
    }

    /// Generates a message using the [`accesskit::Role::Label`] role.
    pub fn message(text: &str) -> accesskit::Node {
        let mut builder = accesskit::NodeBuilder::new(accesskit::Role::Label);
        builder.set_name(text);
        builder.set_live(accesskit::Live::Polite);
        builder.build()
    }

    /// Generates a node using the [`accesskit::Role::Window`] role.
    pub fn window(children: Vec<accesskit::NodeId>) -> accesskit::Node {
        let mut builder = accesskit::NodeBuilder::new(accesskit::Role::Window);
        builder.set_children(children);
        builder.set_name("Hoshi");
        builder.build()
    }
}

impl Default for Nav {
    fn default() -> Self {
        Self::new("Hoshi")
    }
}
