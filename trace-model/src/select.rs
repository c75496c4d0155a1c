use std::fmt;
use std::str::FromStr;

use crate::flatten::flatten;
use crate::span::Span;

// ── Span paths ───────────────────────────────────────────────────────────────

/// Child indices from the root down to a span. The empty path is the root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpanPath(Vec<usize>);

impl SpanPath {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.0.split_last()?;
        Some(Self(rest.to_vec()))
    }

    /// True when `self` is `other` or one of its ancestors
    pub fn contains(&self, other: &SpanPath) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for SpanPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&joined)
    }
}

impl FromStr for SpanPath {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == "root" {
            return Ok(Self::root());
        }
        s.split('.')
            .map(str::parse::<usize>)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

// ── Selection ────────────────────────────────────────────────────────────────

/// Which span is selected for the detail pane and which one is hovered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: SpanPath,
    hovered: Option<SpanPath>,
}

impl Selection {
    /// Start on the first-child chain of `root`, `depth` levels down
    pub fn initial(root: &Span, depth: usize) -> Self {
        let mut path = SpanPath::root();
        let mut span = root;
        for _ in 0..depth {
            let Some(first) = span.child(0) else {
                break;
            };
            path = path.child(0);
            span = first;
        }
        Self {
            selected: path,
            hovered: None,
        }
    }

    pub fn selected(&self) -> &SpanPath {
        &self.selected
    }

    pub fn hovered(&self) -> Option<&SpanPath> {
        self.hovered.as_ref()
    }

    pub fn is_selected(&self, path: &SpanPath) -> bool {
        self.selected == *path
    }

    pub fn select(&mut self, path: SpanPath) {
        self.selected = path;
    }

    pub fn hover(&mut self, path: SpanPath) {
        self.hovered = Some(path);
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    /// The selected span, or the root when the path no longer exists in
    /// `root` (new data arrived with a different shape).
    pub fn resolve<'a>(&self, root: &'a Span) -> (SpanPath, &'a Span) {
        match root.descendant(&self.selected) {
            Some(span) => (self.selected.clone(), span),
            None => (SpanPath::root(), root),
        }
    }

    pub fn select_next(&mut self, root: &Span) {
        self.step(root, 1);
    }

    pub fn select_prev(&mut self, root: &Span) {
        self.step(root, -1);
    }

    fn step(&mut self, root: &Span, delta: isize) {
        let order: Vec<SpanPath> = flatten(root).into_iter().map(|row| row.path).collect();
        let (current, _) = self.resolve(root);
        let Some(position) = order.iter().position(|path| *path == current) else {
            return;
        };
        let last = order.len().saturating_sub(1) as isize;
        let target = (position as isize + delta).clamp(0, last) as usize;
        if let Some(path) = order.get(target) {
            self.selected = path.clone();
        }
    }
}
