//! Debug printer.

use core::fmt::{self, Write as _};

use alloc::vec::Vec;

use crate::id::NodeId;
use crate::tree::Tree;

/// Writer which prefixes every line with the tree guide of the current item.
struct GuideWriter<'a, 'b> {
    /// Backend formatter.
    fmt: &'b mut fmt::Formatter<'a>,
    /// Whether the item at each level is the last sibling.
    ///
    /// Empty for the toplevel item.
    levels: Vec<bool>,
    /// Whether the current line is the first line of the current item.
    is_first_line: bool,
    /// Whether nothing has been written to the current line yet.
    at_line_start: bool,
    /// Whether the current line is not yet terminated.
    line_open: bool,
}

impl<'a, 'b> GuideWriter<'a, 'b> {
    /// Creates a new writer for the toplevel item.
    fn new(fmt: &'b mut fmt::Formatter<'a>) -> Self {
        Self {
            fmt,
            levels: Vec::new(),
            is_first_line: true,
            at_line_start: true,
            line_open: true,
        }
    }

    /// Starts a new item at the given level (1 for children of the toplevel).
    fn start_item(&mut self, level: usize, is_last_sibling: bool) -> fmt::Result {
        debug_assert!(level >= 1, "[precondition] the toplevel item is started by `new`");
        if self.line_open {
            self.fmt.write_char('\n')?;
        }
        self.levels.truncate(level - 1);
        self.levels.push(is_last_sibling);
        self.is_first_line = true;
        self.at_line_start = true;
        self.line_open = true;

        Ok(())
    }

    /// Returns the guide piece for the level.
    fn piece(&self, index: usize, is_last_sibling: bool) -> &'static str {
        let is_own_level = index + 1 == self.levels.len();
        match (is_own_level && self.is_first_line, is_last_sibling) {
            (true, false) => "|-- ",
            (true, true) => "`-- ",
            (false, false) => "|   ",
            (false, true) => "    ",
        }
    }

    /// Writes the guide for the current line.
    ///
    /// If `trim` is true, trailing whitespaces of the guide are not written.
    fn write_guide(&mut self, trim: bool) -> fmt::Result {
        let end = if trim {
            match self.levels.iter().enumerate().rposition(|(index, &is_last)| {
                !self.piece(index, is_last).trim_end().is_empty()
            }) {
                Some(pos) => pos + 1,
                None => return Ok(()),
            }
        } else {
            self.levels.len()
        };
        for index in 0..end {
            let piece = self.piece(index, self.levels[index]);
            if trim && index + 1 == end {
                self.fmt.write_str(piece.trim_end())?;
            } else {
                self.fmt.write_str(piece)?;
            }
        }

        Ok(())
    }
}

impl fmt::Write for GuideWriter<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for line in s.split_inclusive('\n') {
            if self.at_line_start {
                self.write_guide(line == "\n")?;
                self.at_line_start = false;
            }
            self.fmt.write_str(line)?;
            if line.ends_with('\n') {
                self.is_first_line = false;
                self.at_line_start = true;
                self.line_open = false;
            } else {
                self.line_open = true;
            }
        }

        Ok(())
    }
}

/// Tree printer for debugging.
///
/// This is provided mainly for debugging purpose. Note that the output format
/// is not guaranteed to be stable, and any format changes won't be considered
/// as breaking changes.
///
/// # Examples
///
/// ```
/// use gentree::{Tree, TreeBuilder};
///
/// let mut tree = Tree::new("root");
/// TreeBuilder::new(&mut tree)
///     .child("0")
///     .child("0-0")
///     .sibling("0-1")
///     .parent()
///     .sibling("1")
///     .child("1-0");
///
/// let expected = "\
/// root
/// |-- 0
/// |   |-- 0-0
/// |   `-- 0-1
/// `-- 1
///     `-- 1-0";
/// let printer = tree.debug_print(tree.root_id())?;
/// assert_eq!(printer.to_string(), expected);
/// # Ok::<_, gentree::PreconditionError>(())
/// ```
pub struct DebugPrint<'a, T> {
    /// Tree.
    tree: &'a Tree<T>,
    /// Root node of the (sub)tree to print.
    toplevel: NodeId,
}

impl<'a, T> DebugPrint<'a, T> {
    /// Creates a new `DebugPrint` object for the node.
    pub(crate) fn new(tree: &'a Tree<T>, toplevel: NodeId) -> Self {
        Self { tree, toplevel }
    }

    /// Writes the tree, formatting each payload with `write_data`.
    fn write_with<F>(&self, f: &mut fmt::Formatter<'_>, write_data: F) -> fmt::Result
    where
        F: Fn(&mut GuideWriter<'_, '_>, &T) -> fmt::Result,
    {
        let mut writer = GuideWriter::new(f);
        let mut nodes = self
            .tree
            .depth_first(self.toplevel)
            .expect("[consistency] the toplevel node must be alive");

        // Print the toplevel node.
        let toplevel = nodes
            .next()
            .expect("[consistency] the traversal yields the toplevel node first");
        let toplevel_depth = toplevel.depth().map_err(|_| fmt::Error)?;
        write_data(&mut writer, toplevel.data().map_err(|_| fmt::Error)?)?;

        // Print descendants.
        for node in nodes {
            let level = node.depth().map_err(|_| fmt::Error)? - toplevel_depth;
            let is_last_sibling = {
                let mut next = node;
                next.advance();
                next.is_end()
            };
            writer.start_item(level, is_last_sibling)?;
            write_data(&mut writer, node.data().map_err(|_| fmt::Error)?)?;
        }

        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |writer, data| write!(writer, "{}", data))
    }
}

impl<T: fmt::Debug> fmt::Debug for DebugPrint<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |writer, data| write!(writer, "{:?}", data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::format;
    use alloc::string::ToString;

    #[test]
    fn single_node() {
        let tree = Tree::new("root");
        let printer = tree
            .debug_print(tree.root_id())
            .expect("should never fail: the root is alive");
        assert_eq!(printer.to_string(), "root");
        assert_eq!(format!("{:?}", printer), "\"root\"");
    }

    #[test]
    fn multiline_payload() {
        let mut tree = Tree::new("root");
        let root = tree.root_id();
        tree.insert(root, "a\n\nb").expect("should never fail: root is alive");
        tree.insert(root, "c").expect("should never fail: root is alive");

        let printer = tree
            .debug_print(root)
            .expect("should never fail: the root is alive");
        assert_eq!(printer.to_string(), "root\n|-- a\n|\n|   b\n`-- c");
    }

    #[test]
    fn subtree() {
        let mut tree = Tree::new("root");
        let root = tree.root_id();
        let a = tree.insert(root, "a").expect("should never fail: root is alive");
        tree.insert(a, "a-0").expect("should never fail: `a` is alive");
        tree.insert(root, "b").expect("should never fail: root is alive");

        let printer = tree
            .debug_print(a)
            .expect("should never fail: `a` is alive");
        assert_eq!(printer.to_string(), "a\n`-- a-0");
    }
}
