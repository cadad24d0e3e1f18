use serde::{Deserialize, Serialize};

/// A pre-approved message template and the variables filling its placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateMessage {
    pub name: String,
    pub language: String,
    pub header_vars: Vec<String>,
    pub body_vars: Vec<String>,
}

impl TemplateMessage {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            header_vars: Vec::new(),
            body_vars: Vec::new(),
        }
    }

    pub fn with_body(mut self, vars: Vec<String>) -> Self {
        self.body_vars = vars;
        self
    }

    pub fn with_header(mut self, vars: Vec<String>) -> Self {
        self.header_vars = vars;
        self
    }
}
