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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: numeric casts and float comparisons are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::default_trait_access)]
// Polled key state is naturally a set of booleans
#![allow(clippy::struct_excessive_bools)]

//! Interactive 3D cube demo with an orbiting camera, built on wgpu.
//!
//! A single window draws one axis-aligned cube through an immediate-mode
//! vertex batcher (geometry re-issued as per-vertex calls every frame)
//! while the arrow keys and mouse drags orbit, lift, and zoom the camera
//! around it.
//!
//! # Key entry points
//!
//! - [`Viewer`] - window host and event loop
//! - [`app::CubeApp`] - the demo application behind [`hooks::FrameHooks`]
//! - [`camera::controller::OrbitController`] - the pure camera state machine
//! - [`options::Options`] - runtime configuration (window, camera, scene)
//!
//! # Architecture
//!
//! The winit host drives three hooks: resize rebuilds the projection, a
//! fixed-rate (30 Hz) update tick feeds polled input snapshots to the
//! camera controller, and uncapped render ticks rebuild the view transform
//! and re-issue the cube geometry. Camera and drag state are plain values
//! and the controller is a pure function over them, so the whole control
//! scheme tests without a window or GPU.

pub mod app;
pub mod camera;
pub mod error;
pub mod gpu;
pub mod hooks;
pub mod input;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;
pub mod viewer;

pub use error::CubeviewError;
pub use viewer::Viewer;
