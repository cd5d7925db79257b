// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests may unwrap and panic freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

//! Animated robot eyes for small monochrome displays.
//!
//! A pair of eyes expresses one emotion at a time. Procedural emotions are
//! drawn from primitives and animate smoothly between shapes; others play
//! pre-rendered bitmap sets. Blinks, idle glances, trembling and the other
//! small motions run on their own timers.
//!
//! # Key entry points
//!
//! - [`engine::RobotEyes`] - the expression state machine
//! - [`display::Display`] - the drawing seam hosts implement
//! - [`options::Profile`] - screen, geometry and timing constants
//! - [`platform`] - clock and randomness the host provides
//!
//! # Frame loop
//!
//! The host polls [`engine::RobotEyes::update`]. At most once per frame
//! interval the eyes advance their geometry, resolve blinks, run the current
//! emotion's behavior and draw one frame through
//! [`render::FrameRenderer`], ending with a single `present`.

pub mod animation;
pub mod display;
pub mod emotion;
pub mod engine;
pub mod error;
pub mod options;
pub mod platform;
pub mod render;
pub mod util;
