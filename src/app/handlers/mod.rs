//! Feature-Handler für ToolCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod episode;
pub mod pointer;
pub mod tolerance;
