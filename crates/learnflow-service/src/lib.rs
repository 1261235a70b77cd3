//! LearnFlow analysis service.
//!
//! The HTTP service the pipeline orchestrator calls: detects the language
//! and problem in a code submission, classifies it, generates solution
//! variants and an AR scene, evaluates quality, and recommends a video.
//! All state is derived per request; the service holds nothing between
//! calls.

pub mod catalog;
pub mod detector;
pub mod evaluator;
pub mod routes;
pub mod scenes;
pub mod videos;

pub use routes::create_router;
