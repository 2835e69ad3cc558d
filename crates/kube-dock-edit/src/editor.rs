use std::path::Path;

use kube_dock_core::{Directive, EditRequest, KeyValue};

use crate::document::{self, DocumentError};
use crate::scan;

/// Applies an [`EditRequest`] to a descriptor file on disk.
pub struct DockerfileEditor<'a> {
    path: &'a Path,
    request: &'a EditRequest,
}

impl<'a> DockerfileEditor<'a> {
    pub fn new(path: &'a Path, request: &'a EditRequest) -> Self {
        Self { path, request }
    }

    /// Run every requested category in order: EXPOSE, ENV, ADD, COPY.
    ///
    /// Only a failure to load the descriptor is returned as `Err`; that
    /// happens before anything is written. Category failures are recorded
    /// in the report and do not stop later categories.
    pub fn apply(&self) -> Result<EditReport, DocumentError> {
        let content = document::load(self.path)?;
        let mut report = EditReport::default();

        if let Some(value) = self.request.expose.as_deref() {
            let outcome = self.replace_singular(&content, Directive::Expose, value);
            report.push(Directive::Expose, outcome);
        }

        for (directive, items) in self.request.append_batches() {
            if items.is_empty() {
                continue;
            }
            let outcome = self.append_all(directive, items);
            report.push(directive, outcome);
        }

        Ok(report)
    }

    fn replace_singular(
        &self,
        content: &str,
        directive: Directive,
        value: &str,
    ) -> Result<Applied, EditError> {
        let updated = rewrite_singular(content, directive, value)?;
        document::replace_all(self.path, &updated).map_err(|e| EditError::Replace {
            directive,
            source: e,
        })?;

        tracing::info!(%directive, value, "directive replaced");
        Ok(Applied::Replaced {
            value: value.to_owned(),
        })
    }

    fn append_all(&self, directive: Directive, items: &[String]) -> Result<Applied, EditError> {
        let mut lines = Vec::new();
        let mut skipped = Vec::new();

        for raw in items {
            let Some(pair) = KeyValue::parse(raw) else {
                tracing::debug!(%directive, item = %raw, "skipping item without '='");
                skipped.push(raw.clone());
                continue;
            };

            let line = pair.to_line(directive);
            document::append_line(self.path, &line).map_err(|e| EditError::Append {
                directive,
                line: line.clone(),
                written: lines.len(),
                source: e,
            })?;
            lines.push(line);
        }

        tracing::info!(%directive, appended = lines.len(), skipped = skipped.len(), "directives appended");
        Ok(Applied::Appended { lines, skipped })
    }
}

/// Rewrite the single `directive` line of `content` to `NAME value`.
///
/// With no existing line the directive becomes the new first line, using
/// the document's line ending and kept after any byte order mark. More
/// than one existing line is refused; the caller must resolve it by hand.
pub fn rewrite_singular(
    content: &str,
    directive: Directive,
    value: &str,
) -> Result<String, EditError> {
    let replacement = directive.line(value);
    let spans = scan::find_directives(content, directive);
    tracing::debug!(%directive, matches = spans.len(), "scanned descriptor");

    match spans.as_slice() {
        [] => {
            let (bom, rest) = content.split_at(scan::bom_len(content));
            let eol = scan::line_ending(content);
            Ok(format!("{bom}{replacement}{eol}{rest}"))
        }
        [span] => Ok(scan::splice(content, span, &replacement)),
        _ => Err(EditError::Ambiguous {
            directive,
            count: spans.len(),
        }),
    }
}

/// What a successful category did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Replaced { value: String },
    Appended { lines: Vec<String>, skipped: Vec<String> },
}

/// Result of one category of an invocation.
#[derive(Debug)]
pub struct CategoryReport {
    pub directive: Directive,
    pub outcome: Result<Applied, EditError>,
}

/// Per-category results, in the order the categories ran.
#[derive(Debug, Default)]
pub struct EditReport {
    categories: Vec<CategoryReport>,
}

impl EditReport {
    fn push(&mut self, directive: Directive, outcome: Result<Applied, EditError>) {
        self.categories.push(CategoryReport { directive, outcome });
    }

    pub fn categories(&self) -> &[CategoryReport] {
        &self.categories
    }

    pub fn into_categories(self) -> Vec<CategoryReport> {
        self.categories
    }

    pub fn failures(&self) -> usize {
        self.categories.iter().filter(|c| c.outcome.is_err()).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error(
        "found {count} {directive} directives; refusing to choose one, keep a single {directive} line and retry"
    )]
    Ambiguous { directive: Directive, count: usize },
    #[error("failed to rewrite {directive} directive")]
    Replace {
        directive: Directive,
        source: DocumentError,
    },
    #[error("failed to append `{line}` ({written} {directive} line(s) already written)")]
    Append {
        directive: Directive,
        line: String,
        written: usize,
        source: DocumentError,
    },
}
