use crate::core::{FeatureId, Geometry};

/// Abgeschlossener Edit-Command mit Geometrien vor und nach der Änderung.
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommand {
    /// Undo-Beschriftung
    pub label: String,
    /// Geometrien vor dem Command
    pub before: Vec<(FeatureId, Geometry)>,
    /// Geometrien nach dem Command
    pub after: Vec<(FeatureId, Geometry)>,
}

/// Begrenzte Undo/Redo-Historie eines Layers.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<EditCommand>,
    redo_stack: Vec<EditCommand>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt eine Historie mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen neuen Command auf und verwirft den Redo-Stack.
    pub fn record(&mut self, command: EditCommand) {
        self.push_undo(command);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Beschriftung des nächsten Undo-Schritts.
    pub fn undo_label(&self) -> Option<&str> {
        self.undo_stack.last().map(|command| command.label.as_str())
    }

    pub(super) fn pop_undo(&mut self) -> Option<EditCommand> {
        self.undo_stack.pop()
    }

    pub(super) fn pop_redo(&mut self) -> Option<EditCommand> {
        self.redo_stack.pop()
    }

    pub(super) fn push_undo(&mut self, command: EditCommand) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(command);
    }

    pub(super) fn push_redo(&mut self, command: EditCommand) {
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::point;

    fn command(label: &str) -> EditCommand {
        let geometry = Geometry::Point(point!(x: 0.0, y: 0.0));
        EditCommand {
            label: label.to_string(),
            before: vec![(FeatureId(1), geometry.clone())],
            after: vec![(FeatureId(1), geometry)],
        }
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = EditHistory::new_with_capacity(10);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo_label().is_none());
    }

    #[test]
    fn record_clears_redo_stack() {
        let mut history = EditHistory::new_with_capacity(10);
        history.record(command("a"));
        let undone = history.pop_undo().expect("undo vorhanden");
        history.push_redo(undone);
        assert!(history.can_redo());

        history.record(command("b"));
        assert!(!history.can_redo());
        assert_eq!(history.undo_label(), Some("b"));
    }

    #[test]
    fn respects_max_depth() {
        let mut history = EditHistory::new_with_capacity(3);
        for i in 0..5 {
            history.record(command(&format!("c{i}")));
        }

        let mut undo_count = 0;
        while history.pop_undo().is_some() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
    }
}
