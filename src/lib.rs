//! Interview Coach - mock job interview practice engine
//!
//! Runs a role-specific question sequence, records each answer, and scores
//! the finished interview with heuristic feedback.
//!
//! ```no_run
//! use interview_coach::application::{InterviewServices, TurnOutcome};
//! use interview_coach::config::InterviewConfig;
//! use interview_coach::domain::foundation::RoleId;
//! use interview_coach::domain::role::RoleCatalog;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let services = InterviewServices::in_memory(RoleCatalog::builtin(), InterviewConfig::default());
//! let flow = services.flow();
//! let mut state = flow.start(RoleId::new("engineer")?).await?;
//! while let Some(question) = state.current_question().map(str::to_owned) {
//!     println!("{}", question);
//!     if let TurnOutcome::Finished(feedback) = flow.submit_answer(&mut state, "...").await? {
//!         println!("{}", feedback.detailed_feedback());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
