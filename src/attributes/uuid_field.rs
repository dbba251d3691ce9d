use uuid::Uuid;

/// Art des gebundenen Editor-Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidEditorKind {
    /// Einzeiliges Textfeld
    LineEdit,
    /// Reine Textanzeige
    Label,
}

/// Attributfeld für UUID-Werte.
///
/// Das Feld ist nie editierbar. Ein leerer Wert wird beim Setzen durch eine
/// neue UUID ersetzt, die als Wertänderung gemeldet wird.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UuidField {
    editor: Option<UuidEditorKind>,
    text: String,
}

impl UuidField {
    /// Erstellt ein ungebundenes Feld.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindet das Feld an ein Editor-Element.
    pub fn bind(&mut self, editor: UuidEditorKind) {
        self.editor = Some(editor);
    }

    /// Gebundenes Editor-Element.
    pub fn editor(&self) -> Option<UuidEditorKind> {
        self.editor
    }

    /// Gibt `true` zurück, sobald ein Editor-Element gebunden ist.
    pub fn is_valid(&self) -> bool {
        self.editor.is_some()
    }

    /// Immer `false`: UUIDs werden nicht von Hand editiert.
    pub fn is_enabled(&self) -> bool {
        false
    }

    /// Angezeigter Wert (leer, solange nichts gebunden ist).
    pub fn value(&self) -> &str {
        match self.editor {
            Some(_) => &self.text,
            None => "",
        }
    }

    /// Setzt den angezeigten Wert.
    ///
    /// Bei `None` wird eine neue UUID in geschweiften Klammern erzeugt und
    /// als geänderter Wert zurückgegeben. Ein vorhandener Wert wird nur
    /// angezeigt und nicht als Änderung gemeldet.
    pub fn set_value(&mut self, value: Option<&str>) -> Option<String> {
        match value {
            Some(text) => {
                self.text = text.to_string();
                None
            }
            None => {
                let generated = Uuid::new_v4().braced().to_string();
                log::debug!("Neue UUID erzeugt: {}", generated);
                self.text = generated.clone();
                Some(generated)
            }
        }
    }
}
