//! Row-stream parser that builds the component tree.

use std::iter::Enumerate;
use std::str::Lines;

use tracing::debug;

use super::decoder::decode_line;
use crate::error::{ParamMapError, Result};
use crate::model::ComponentId;
use crate::tree::ComponentTree;

/// Position of the parser within the row stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// The header line has not been consumed yet
    AwaitingHeader,
    /// No component has been declared yet
    NoCurrentComponent,
    /// Parameter-only rows attach to this component
    HaveCurrentComponent(ComponentId),
}

/// Parser for the parameter table.
pub struct Parser<'a> {
    lines: Enumerate<Lines<'a>>,
    state: ParseState,
    tree: ComponentTree,
}

impl<'a> Parser<'a> {
    /// Create a new parser over the full table text.
    pub fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            state: ParseState::AwaitingHeader,
            tree: ComponentTree::new(),
        }
    }

    /// Parse every row and return the finished tree.
    pub fn parse(mut self) -> Result<ComponentTree> {
        while let Some((index, text)) = self.lines.next() {
            let line = index + 1;

            if self.state == ParseState::AwaitingHeader {
                debug!(header = text, "skipping header line");
                self.state = ParseState::NoCurrentComponent;
                continue;
            }

            self.parse_row(line, text)?;
        }

        if self.state == ParseState::AwaitingHeader {
            return Err(ParamMapError::MissingHeader);
        }

        Ok(self.tree)
    }

    fn parse_row(&mut self, line: usize, text: &str) -> Result<()> {
        let row = decode_line(line, text)?;

        let current = match (row.declaration, self.state) {
            (Some(decl), _) => self.tree.declare(
                &decl.component_type,
                decl.parent.as_deref(),
                &decl.name,
                line,
            )?,
            (None, ParseState::HaveCurrentComponent(id)) => id,
            (None, _) => return Err(ParamMapError::OrphanParameter { line }),
        };

        self.tree.add_parameter(current, row.parameter);
        self.state = ParseState::HaveCurrentComponent(current);
        Ok(())
    }
}
