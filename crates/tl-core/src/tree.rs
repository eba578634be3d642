//! Per-day event tree aggregation and the timelog output format.
//!
//! Every interval of a day is added to the root and to each node along its
//! category path, so a node always holds the total time spent on everything
//! beneath it:
//!
//! ```text
//! # 2023-01-02
//!
//! - 8h
//! 	- 7h30m: Work
//! 		- 7h: ProjectA
//! 		- 30m: ProjectB
//! 	- 30m: Lunch
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Write;

use chrono::TimeDelta;

use crate::duration::format_duration;
use crate::error::TimelogError;
use crate::section::DaySection;

/// A node of the aggregated event tree.
///
/// The root has an empty label and depth 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTree {
    pub label: String,
    pub depth: usize,
    pub sum: TimeDelta,
    pub children: HashMap<String, EventTree>,
}

impl EventTree {
    fn new(label: impl Into<String>, depth: usize) -> Self {
        Self {
            label: label.into(),
            depth,
            sum: TimeDelta::zero(),
            children: HashMap::new(),
        }
    }

    /// Creates an empty root node.
    pub fn root() -> Self {
        Self::new("", 0)
    }

    /// Builds the tree for one day section.
    pub fn from_section(section: &DaySection) -> Result<Self, TimelogError> {
        let mut root = Self::root();
        for interval in section.intervals()? {
            root.aggregate(interval.path, interval.duration());
        }
        Ok(root)
    }

    /// Adds `duration` to this node and to every node along `path`,
    /// creating missing nodes.
    pub fn aggregate(&mut self, path: &[String], duration: TimeDelta) {
        self.sum += duration;
        let Some((head, rest)) = path.split_first() else {
            return;
        };
        let depth = self.depth + 1;
        self.children
            .entry(head.clone())
            .or_insert_with(|| Self::new(head.as_str(), depth))
            .aggregate(rest, duration);
    }

    /// Children ordered for display: larger sum first, then by label.
    pub fn sorted_children(&self) -> Vec<&Self> {
        let mut children: Vec<&Self> = self.children.values().collect();
        children.sort_by(|a, b| larger_sum_first(a, b));
        children
    }

    /// Looks up a descendant by its label path.
    #[cfg(test)]
    pub(crate) fn get(&self, path: &[&str]) -> Option<&Self> {
        path.iter()
            .try_fold(self, |node, label| node.children.get(*label))
    }

    /// Writes this node and its descendants as an indented bullet list.
    pub fn write_sorted(&self, out: &mut String) {
        for _ in 0..self.depth {
            out.push('\t');
        }
        write!(out, "- {}", format_duration(self.sum)).unwrap();
        if !self.label.is_empty() {
            write!(out, ": {}", self.label).unwrap();
        }
        writeln!(out).unwrap();

        for child in self.sorted_children() {
            child.write_sorted(out);
        }
    }
}

fn larger_sum_first(a: &EventTree, b: &EventTree) -> Ordering {
    b.sum.cmp(&a.sum).then_with(|| a.label.cmp(&b.label))
}

/// Renders every section as a `# <date>` heading followed by its tree.
///
/// Nothing is returned unless all sections aggregate successfully.
pub fn format_timelog(sections: &[DaySection]) -> Result<String, TimelogError> {
    let mut out = String::new();
    for section in sections {
        let tree = EventTree::from_section(section)?;
        writeln!(out, "# {}", section.date).unwrap();
        writeln!(out).unwrap();
        tree.write_sorted(&mut out);
        writeln!(out).unwrap();
    }
    Ok(out)
}
