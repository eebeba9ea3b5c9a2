use crate::model::{AnalyzedEntry, PropertyRecord};

pub mod add;
pub mod delete;
pub mod get;
pub mod inspect;
pub mod query;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// Structured command output. Commands return data, never formatted strings;
/// rendering is the CLI's problem.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_entries: Vec<AnalyzedEntry>,
    pub listed_entries: Vec<AnalyzedEntry>,
    pub properties: Option<PropertyRecord>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_entries(mut self, entries: Vec<AnalyzedEntry>) -> Self {
        self.affected_entries = entries;
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<AnalyzedEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_properties(mut self, properties: PropertyRecord) -> Self {
        self.properties = Some(properties);
        self
    }
}
