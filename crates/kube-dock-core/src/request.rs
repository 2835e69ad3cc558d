use std::fmt;

/// Dockerfile instructions kube-dock knows how to edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Expose,
    Env,
    Add,
    Copy,
}

impl Directive {
    /// Instruction keyword as written in the descriptor file.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Expose => "EXPOSE",
            Self::Env => "ENV",
            Self::Add => "ADD",
            Self::Copy => "COPY",
        }
    }

    /// Render a full directive line: `NAME args`.
    pub fn line(self, args: &str) -> String {
        format!("{} {args}", self.keyword())
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A `key=value` item split on its first `=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl KeyValue {
    /// Split `raw` on the first `=`. Returns `None` when there is no `=`,
    /// so values may themselves contain `=`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (key, value) = raw.split_once('=')?;
        Some(Self {
            key: key.to_owned(),
            value: value.to_owned(),
        })
    }

    /// Directive line for this pair: `NAME key value`.
    pub fn to_line(&self, directive: Directive) -> String {
        directive.line(&format!("{} {}", self.key, self.value))
    }
}

/// One invocation's worth of requested edits.
///
/// Built once from user input and handed to the editor; nothing here
/// outlives the invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    /// New EXPOSE value. `None` leaves the directive untouched.
    pub expose: Option<String>,
    /// Raw `key=value` items for ENV directives
    pub env: Vec<String>,
    /// Raw `key=value` items for ADD directives
    pub add: Vec<String>,
    /// Raw `key=value` items for COPY directives
    pub copy: Vec<String>,
}

impl EditRequest {
    /// Set the EXPOSE value; an empty string means "no change".
    pub fn with_expose(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.expose = if value.is_empty() { None } else { Some(value) };
        self
    }

    pub fn with_env(mut self, items: Vec<String>) -> Self {
        self.env = items;
        self
    }

    pub fn with_add(mut self, items: Vec<String>) -> Self {
        self.add = items;
        self
    }

    pub fn with_copy(mut self, items: Vec<String>) -> Self {
        self.copy = items;
        self
    }

    /// Append categories in processing order, paired with their raw items.
    pub fn append_batches(&self) -> [(Directive, &[String]); 3] {
        [
            (Directive::Env, self.env.as_slice()),
            (Directive::Add, self.add.as_slice()),
            (Directive::Copy, self.copy.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.expose.is_none() && self.env.is_empty() && self.add.is_empty() && self.copy.is_empty()
    }
}
