//! Viewport width → items-per-page resolution.
//!
//! Resolution order:
//!
//! 1. Explicit `layout.columns` wins unconditionally.
//! 2. Otherwise the `[[responsive]]` entry with the largest `min_width` that
//!    does not exceed the viewport width.
//! 3. Otherwise the built-in tiers: `>= 1024px → 4`, `>= 768px → 3`, else `2`.
//!
//! Every path yields at least one item per page.

use crate::config::BreakpointConfig;

/// Built-in tiers used when no breakpoint matches: `(min_width, items)`,
/// widest first.
const DEFAULT_TIERS: [(u32, usize); 2] = [(1024, 4), (768, 3)];
const DEFAULT_NARROW_ITEMS: usize = 2;

/// A single breakpoint: viewports at least `min_width` wide show `items_per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint {
    pub min_width: u32,
    pub items_per_page: usize,
}

/// Breakpoints sorted ascending by `min_width`, duplicates resolved last-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointTable {
    entries: Vec<Breakpoint>,
}

impl BreakpointTable {
    pub fn new(entries: impl IntoIterator<Item = Breakpoint>) -> Self {
        let mut entries: Vec<Breakpoint> = entries.into_iter().collect();
        // Stable sort keeps declaration order among equal widths; the dedup
        // below keeps the last of each run.
        entries.sort_by_key(|bp| bp.min_width);
        let mut deduped: Vec<Breakpoint> = Vec::with_capacity(entries.len());
        for bp in entries {
            match deduped.last_mut() {
                Some(last) if last.min_width == bp.min_width => *last = bp,
                _ => deduped.push(bp),
            }
        }
        Self { entries: deduped }
    }

    pub fn from_config(breakpoints: &[BreakpointConfig]) -> Self {
        Self::new(breakpoints.iter().map(|bp| Breakpoint {
            min_width: bp.min_width,
            items_per_page: bp.columns,
        }))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Breakpoint] {
        &self.entries
    }

    /// The entry with the largest `min_width <= viewport_width`, if any.
    pub fn lookup(&self, viewport_width: u32) -> Option<Breakpoint> {
        self.entries
            .iter()
            .take_while(|bp| bp.min_width <= viewport_width)
            .last()
            .copied()
    }
}

/// Items-per-page from the built-in tiers.
pub fn default_items_per_page(viewport_width: u32) -> usize {
    DEFAULT_TIERS
        .iter()
        .find(|(min_width, _)| viewport_width >= *min_width)
        .map(|(_, items)| *items)
        .unwrap_or(DEFAULT_NARROW_ITEMS)
}

/// Resolve the active items-per-page count. Never returns zero.
pub fn resolve(
    viewport_width: u32,
    table: &BreakpointTable,
    explicit_columns: Option<usize>,
) -> usize {
    let items = explicit_columns
        .or_else(|| table.lookup(viewport_width).map(|bp| bp.items_per_page))
        .unwrap_or_else(|| default_items_per_page(viewport_width));
    items.max(1)
}
