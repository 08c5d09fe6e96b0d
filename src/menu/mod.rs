use crate::stack::{self, Stack};

use std::io::{BufRead, Write};

mod choice;
use choice::Choice;

#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

const BANNER: &str = "\
--- STACK ADT MENU ---
1. Push
2. Pop
3. Peek
4. isEmpty
5. Size
6. Display Stack
7. Reverse a String (Meaningful Use)
0. Exit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive driver for a single [`Stack`] of strings.
#[derive(Debug)]
pub struct Menu<R, W> {
    input: R,
    output: W,
    stack: Stack<String>,
    step_no: usize,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            stack: Stack::new(),
            step_no: 0,
        }
    }

    /// Shows the menu, reads one choice and acts on it.
    pub fn step(&mut self) -> anyhow::Result<Flow> {
        writeln!(self.output, "\n{}", BANNER)?;

        let line = match self.prompt("Enter your choice: ")? {
            Some(line) => line,
            None => {
                debug!("menu: end of input after {} steps", self.step_no);

                return self.exit();
            }
        };

        let flow = match line.trim().parse::<Choice>() {
            Ok(choice) => {
                trace!("step {}: {}", self.step_no, choice);

                self.action(choice)?
            }
            Err(_) => {
                info!("menu: invalid choice {:?}", line.trim());
                writeln!(self.output, "Invalid choice. Try again.")?;

                Flow::Continue
            }
        };

        self.step_no += 1;

        Ok(flow)
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.step()? == Flow::Continue {}

        self.output.flush()?;

        Ok(())
    }

    #[allow(dead_code)]
    pub fn stack(&self) -> &Stack<String> {
        &self.stack
    }

    #[allow(dead_code)]
    pub fn into_output(self) -> W {
        self.output
    }

    #[rustfmt::skip]
    fn action(&mut self, choice: Choice) -> anyhow::Result<Flow> {
        match choice {
            Choice::Push     => self.push()?,
            Choice::Pop      => self.pop()?,
            Choice::Peek     => self.peek()?,
            Choice::IsEmpty  => self.is_empty()?,
            Choice::Size     => self.size()?,
            Choice::Display  => self.display()?,
            Choice::Reverse  => self.reverse()?,
            Choice::Exit     => return self.exit(),
        }

        Ok(Flow::Continue)
    }

    fn push(&mut self) -> anyhow::Result<()> {
        let v = match self.prompt("Enter value to push: ")? {
            Some(v) => v,
            None => return Ok(()),
        };

        trace!("action: push, value {:?}", v);

        writeln!(self.output, "Pushed: {}", v)?;
        self.stack.push(v);

        Ok(())
    }

    fn pop(&mut self) -> anyhow::Result<()> {
        trace!("action: pop");

        match self.stack.pop() {
            Ok(v) => writeln!(self.output, "Popped: {}", v)?,
            Err(e) => {
                info!("pop failed: {}", e);
                writeln!(self.output, "Underflow! Stack is empty, cannot pop.")?;
            }
        }

        Ok(())
    }

    fn peek(&mut self) -> anyhow::Result<()> {
        trace!("action: peek");

        match self.stack.peek() {
            Ok(v) => writeln!(self.output, "Top element: {}", v)?,
            Err(e) => {
                info!("peek failed: {}", e);
                writeln!(self.output, "Stack is empty, nothing to peek.")?;
            }
        }

        Ok(())
    }

    fn is_empty(&mut self) -> anyhow::Result<()> {
        trace!("action: is_empty");

        writeln!(self.output, "isEmpty: {}", self.stack.is_empty())?;

        Ok(())
    }

    fn size(&mut self) -> anyhow::Result<()> {
        trace!("action: size");

        writeln!(self.output, "Size: {}", self.stack.size())?;

        Ok(())
    }

    fn display(&mut self) -> anyhow::Result<()> {
        trace!("action: display");

        let items = self.stack.display();
        writeln!(self.output, "Stack (bottom -> top): [{}]", items.join(", "))?;

        Ok(())
    }

    fn reverse(&mut self) -> anyhow::Result<()> {
        let s = match self.prompt("Enter a string to reverse: ")? {
            Some(s) => s,
            None => return Ok(()),
        };

        trace!("action: reverse, value {:?}", s);

        writeln!(self.output, "Reversed string: {}", stack::reverse(&s))?;

        Ok(())
    }

    fn exit(&mut self) -> anyhow::Result<Flow> {
        trace!("action: exit");

        writeln!(self.output, "Exiting Programme.")?;

        Ok(Flow::Exit)
    }

    /// Writes `prompt` and reads one line, without its line ending. `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);

        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> (String, Vec<String>) {
        let mut menu = Menu::new(Cursor::new(script.to_string()), Vec::<u8>::new());
        menu.run().unwrap();

        let stack = menu.stack().display();
        let out = String::from_utf8(menu.into_output()).unwrap();

        (out, stack)
    }

    #[test]
    fn push_then_display() {
        let (out, stack) = session("1\na\n1\nb\n1\nc\n6\n0\n");

        assert!(out.contains("Pushed: a"));
        assert!(out.contains("Pushed: c"));
        assert!(out.contains("Stack (bottom -> top): [a, b, c]"));
        assert!(out.ends_with("Exiting Programme.\n"));
        assert_eq!(vec!["a", "b", "c"], stack);
    }

    #[test]
    fn pop_until_underflow() {
        let (out, stack) = session("1\nx\n1\ny\n2\n5\n2\n2\n0\n");

        assert!(out.contains("Popped: y"));
        assert!(out.contains("Size: 1"));
        assert!(out.contains("Popped: x"));
        assert!(out.contains("Underflow! Stack is empty, cannot pop."));
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_and_is_empty() {
        let (out, stack) = session("3\n4\n1\ntop\n3\n4\n0\n");

        assert!(out.contains("Stack is empty, nothing to peek."));
        assert!(out.contains("isEmpty: true"));
        assert!(out.contains("Top element: top"));
        assert!(out.contains("isEmpty: false"));
        assert_eq!(vec!["top"], stack);
    }

    #[test]
    fn reverse_leaves_stack_alone() {
        let (out, stack) = session("7\nhello\n5\n0\n");

        assert!(out.contains("Reversed string: olleh"));
        assert!(out.contains("Size: 0"));
        assert!(stack.is_empty());
    }

    #[test]
    fn invalid_choice_keeps_going() {
        let (out, _) = session("9\nabc\n5\n0\n");

        assert_eq!(2, out.matches("Invalid choice. Try again.").count());
        assert!(out.contains("Size: 0"));
    }

    #[test]
    fn end_of_input_exits() {
        let (out, stack) = session("1\nlast");

        assert!(out.contains("Pushed: last"));
        assert!(out.ends_with("Exiting Programme.\n"));
        assert_eq!(vec!["last"], stack);
    }

    #[test]
    fn values_keep_inner_whitespace() {
        let (out, stack) = session("1\n  spaced out \r\n0\n");

        assert!(out.contains("Pushed:   spaced out "));
        assert_eq!(vec!["  spaced out "], stack);
    }

    #[test]
    fn step_reports_flow() {
        let mut menu = Menu::new(Cursor::new("5\n0\n"), Vec::<u8>::new());

        assert_eq!(Flow::Continue, menu.step().unwrap());
        assert_eq!(Flow::Exit, menu.step().unwrap());
    }

    #[test]
    fn display_shows_snapshot_without_popping() {
        let (out, stack) = session("6
1
bottom
1
next top
6
5
0
");

        assert!(out.contains("Stack (bottom -> top): []"));
        assert!(out.contains("Stack (bottom -> top): [bottom, next top]"));
        assert!(out.contains("Size: 2"));
        assert_eq!(vec!["bottom", "next top"], stack);
    }
}
