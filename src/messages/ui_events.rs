//! UI events - messages from UI layer to App layer

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A line typed at the prompt
    Submit(String),
    /// Stop taking input; in-flight requests still finish
    Quit,
}

/// REPL built-ins, checked before a line reaches the command parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuiltIn {
    Quit,
    /// `help`, or `help <resource>` for one catalog entry
    Help(Option<String>),
}

impl BuiltIn {
    pub fn from_line(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let first = words.next()?;
        let topic = words.next();
        if words.next().is_some() {
            return None;
        }

        match (first.to_ascii_lowercase().as_str(), topic) {
            ("quit" | "exit", None) => Some(BuiltIn::Quit),
            ("help", topic) => Some(BuiltIn::Help(topic.map(str::to_string))),
            _ => None,
        }
    }
}
