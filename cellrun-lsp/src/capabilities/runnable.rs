use lsp_types::{Command, Range, Url};
use serde_json::{json, Value};

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct RunnableCell {
    /// The document the cell lives in.
    pub uri: Url,
    /// The location in the file where the runnable button should be displayed
    pub range: Range,
}

/// A runnable is a code cell that can be executed in the editor.
pub trait Runnable: core::fmt::Debug + Send + Sync + 'static {
    /// The command to execute.
    fn command(&self) -> Command {
        Command {
            command: self.cmd_string(),
            title: self.label_string(),
            arguments: self.arguments(),
        }
    }
    /// The command name defined in the client.
    fn cmd_string(&self) -> String;
    /// The label to display in the editor.
    fn label_string(&self) -> String;
    /// The arguments to pass to the command.
    fn arguments(&self) -> Option<Vec<Value>>;
    /// The range in the file where the runnable button should be displayed.
    fn range(&self) -> &Range;
}

impl Runnable for RunnableCell {
    fn cmd_string(&self) -> String {
        "cellrun.runCell".to_string()
    }
    fn label_string(&self) -> String {
        "Run cell".to_string()
    }
    fn arguments(&self) -> Option<Vec<Value>> {
        Some(vec![json!({ "uri": self.uri.clone(), "range": self.range })])
    }
    fn range(&self) -> &Range {
        &self.range
    }
}
