use crate::board::NodeId;

/// Which node shows its edit/delete controls and which one is open in the
/// edit dialog.
///
/// Kept apart from the gesture machine: clicking a node makes it active
/// whether or not a drag follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<NodeId>,
    editing: Option<NodeId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The node whose controls are visible.
    pub fn active(&self) -> Option<NodeId> {
        self.active
    }

    /// The node open in the edit dialog.
    pub fn editing(&self) -> Option<NodeId> {
        self.editing
    }

    pub fn is_active(&self, id: NodeId) -> bool {
        self.active == Some(id)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Make `id` the active node.
    pub fn activate(&mut self, id: NodeId) {
        self.active = Some(id);
    }

    /// Hide the controls of the active node.
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    /// Open the edit dialog for `id`.
    pub fn open_editor(&mut self, id: NodeId) {
        self.editing = Some(id);
    }

    /// Close the edit dialog. Confirm and cancel both end here.
    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    /// Activate a freshly added node and open it for editing.
    pub fn focus_new(&mut self, id: NodeId) {
        self.active = Some(id);
        self.editing = Some(id);
    }

    /// Drop every reference to a deleted node.
    ///
    /// If `id` was active or being edited, both the active node and the edit
    /// dialog are cleared. Returns whether anything changed.
    pub fn forget(&mut self, id: NodeId) -> bool {
        if self.active == Some(id) || self.editing == Some(id) {
            self.active = None;
            self.editing = None;
            true
        } else {
            false
        }
    }
}
