//! Attribut-Editoren für Feature-Formulare.

mod uuid_field;

pub use uuid_field::{UuidEditorKind, UuidField};
