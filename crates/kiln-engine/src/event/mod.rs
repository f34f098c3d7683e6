//! Synchronous publish/subscribe.
//!
//! Every stateful component (pointer, touch set, keyboard, clock) owns an
//! [`EventDispatcher`] for its own event type. Dispatch is immediate and
//! depth-first: all subscribers run, in subscription order, before the
//! mutating call that produced the event returns.

mod dispatcher;

pub use dispatcher::{EventDispatcher, ListenerId};
