//! Quest bundling.
//!
//! `aggregator` turns a selection into parsed quest documents and `writer`
//! puts the resulting envelope on disk.

pub mod aggregator;
pub mod writer;

pub use aggregator::QuestAggregator;
pub use writer::write_bundle;
