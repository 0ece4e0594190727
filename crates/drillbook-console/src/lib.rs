//! drillbook-console — Console implementations for drillbook.
//!
//! The [`Console`](drillbook_core::console::Console) trait is defined in
//! `drillbook-core`; this crate provides the real terminal console and a
//! scripted console for driving the engine in tests.

pub mod scripted;
pub mod style;
pub mod term;

pub use scripted::ScriptedConsole;
pub use term::TermConsole;
