use super::{
    classify::LineClass,
    kinds::{Heading, ListFamily, ListItem},
};

/// State of the list-run machine.
///
/// `None` is both the initial state and the only state in which output may
/// end; [`BlockBuilder::finish`] forces the close transition first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    None,
    InList(ListFamily),
}

/// Line-level builder: renders headings and groups consecutive list items of
/// the same family into one list container.
///
/// Output is one string per line; list containers put their open tag, each
/// item and their close tag on lines of their own. Blank lines are kept as
/// empty lines so paragraph separation survives.
pub struct BlockBuilder {
    run: RunState,
    out: Vec<String>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            run: RunState::None,
            out: vec![],
        }
    }

    pub fn state(&self) -> RunState {
        self.run
    }

    pub fn push(&mut self, line: &LineClass<'_>) {
        match *line {
            LineClass::ListItem { family, content } => {
                if self.run != RunState::InList(family) {
                    self.close_run();
                    self.open_run(family);
                }
                self.out.push(ListItem::to_html(content));
            }
            LineClass::Blank => {
                self.close_run();
                self.out.push(String::new());
            }
            LineClass::Heading { level, content } => {
                self.close_run();
                self.out.push(Heading::to_html(level, content));
            }
            LineClass::Plain(text) => {
                self.close_run();
                self.out.push(text.to_string());
            }
        }
    }

    pub fn finish(mut self) -> Vec<String> {
        // EOF close
        self.close_run();
        self.out
    }

    fn open_run(&mut self, family: ListFamily) {
        self.out.push(family.open_tag());
        self.run = RunState::InList(family);
    }

    fn close_run(&mut self) {
        if let RunState::InList(family) = std::mem::replace(&mut self.run, RunState::None) {
            self.out.push(family.close_tag());
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
