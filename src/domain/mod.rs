//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamp, score, errors)
//! - `role` - Role definitions and the role catalog
//! - `sequencer` - Next-question rules
//! - `exchange` - Recorded question/answer turns
//! - `feedback` - Feedback entity and analyzer
//! - `session` - Session aggregate, interview state and error taxonomy

pub mod exchange;
pub mod feedback;
pub mod foundation;
pub mod role;
pub mod sequencer;
pub mod session;
