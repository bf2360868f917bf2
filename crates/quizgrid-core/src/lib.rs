//! quizgrid-core — crossword construction/validation and assignment scoring.
//!
//! This crate is the engine behind an educational content platform: the
//! authoring UI drives [`editor::CrosswordEditor`] transitions, persisted
//! JSON documents round-trip through [`model`] and [`parser`], and the
//! student runtime hands its answer list to [`scoring::score`].

pub mod editor;
pub mod error;
pub mod grid;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod placement;
pub mod review;
pub mod scoring;
