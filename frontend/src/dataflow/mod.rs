//! Dataflow primitives the corkboard domains are built from
//!
//! - **[`Relay`]** - Typed event channel from UI handlers to an Actor
//! - **[`Actor`]** - Single-value state owned by one sequential processor task
//! - **[`ActorVec`]** - Collection state owned by one processor task
//! - **[`Atom`]** - Local UI state (input fields) on top of an Actor
//!
//! Relays follow the `{source}_{event}_relay` naming pattern and every relay
//! is sent from exactly one place in the code.

pub mod relay;
pub mod actor;
pub mod actor_vec;
pub mod atom;

pub use relay::{Relay, relay};
pub use actor::Actor;
pub use actor_vec::{ActorVec, ActorVecHandle};
pub use atom::Atom;
