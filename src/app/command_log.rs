//! Command-Log des Werkzeugs, gruppiert nach Selektions-Episoden.

use std::collections::VecDeque;

use super::ToolCommand;

/// Ein geloggter Command mit der Episode, in der er ausgeführt wurde.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedCommand {
    /// Laufende Nummer der Episode (startet bei 0, jede neue Selektion zählt hoch)
    pub episode: u64,
    /// Ausgeführter Command
    pub command: ToolCommand,
}

/// Ringpuffer der zuletzt ausgeführten Commands.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: VecDeque<LoggedCommand>,
    episode: u64,
}

impl CommandLog {
    const CAPACITY: usize = 1000;

    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt einen Command an. `BeginSelection` eröffnet eine neue Episode;
    /// bei voller Kapazität fällt der älteste Eintrag heraus.
    pub fn record(&mut self, command: &ToolCommand) {
        if matches!(command, ToolCommand::BeginSelection { .. }) {
            self.episode += 1;
        }
        if self.entries.len() == Self::CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedCommand {
            episode: self.episode,
            command: command.clone(),
        });
    }

    /// Anzahl der gepufferten Commands.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn noch kein Command geloggt wurde.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&ToolCommand> {
        self.entries.back().map(|entry| &entry.command)
    }

    /// Nummer der aktuellen Episode.
    pub fn current_episode(&self) -> u64 {
        self.episode
    }

    /// Commands der aktuellen Episode in Ausführungsreihenfolge.
    pub fn current_episode_commands(&self) -> impl Iterator<Item = &ToolCommand> {
        let episode = self.episode;
        self.entries
            .iter()
            .filter(move |entry| entry.episode == episode)
            .map(|entry| &entry.command)
    }

    /// Alle gepufferten Einträge, älteste zuerst.
    pub fn iter(&self) -> impl Iterator<Item = &LoggedCommand> {
        self.entries.iter()
    }
}
