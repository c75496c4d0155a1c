pub mod trace_tree;

pub use trace_tree::PanelTraceTree;
