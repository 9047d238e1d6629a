// page interaction logic
//
// nothing in this crate knows about the browser: each feature is a small state type or a pure
// function over plain values, and the webapp crate binds them to the DOM.  this keeps the
// interesting parts (mostly the carousel timers) testable without a browser
pub mod carousel;
pub mod config;
pub mod filter;
pub mod layout;
pub mod menu;
pub mod navigation;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;
