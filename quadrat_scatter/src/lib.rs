// Copyright 2025 the Quadrat Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=quadrat_scatter --heading-base-level=0

//! Quadrat Scatter: seeded rectangle fields with spacing indices and draw lists.
//!
//! Quadrat Scatter sits on top of [`quadrat_index`] and speaks [`kurbo`]
//! geometry. It covers the steps between "scatter some rectangles" and "what
//! is under the cursor":
//!
//! - [`Field::generate`] scatters rectangles over a domain from a seeded
//!   generator ([`Sfc32`]), bit-reproducibly across platforms.
//! - [`Field::spacing_index`] builds a quadtree from footprints padded to a
//!   minimum extent, so proximity probes cannot slip past small items.
//! - [`Field::hits_at`] and [`Field::near`] answer exact and padded picking
//!   against that index.
//! - [`RenderList::build`] flattens a field and its partition into
//!   renderer-agnostic draw lists, selected per layer with [`Layers`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use quadrat_scatter::{DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS, Field, FieldParams};
//!
//! let domain = Rect::new(0.0, 0.0, 1200.0, 800.0);
//! let field = Field::generate(domain, FieldParams::default());
//! assert_eq!(field.len(), 400);
//!
//! let index = field.spacing_index(DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS);
//!
//! // Exact picking agrees with an exhaustive scan of the raw items.
//! let at = Point::new(600.0, 400.0);
//! let scan = field.linear_scan();
//! assert_eq!(
//!     field.hits_at(&index, at),
//!     scan.query_point(at.x, at.y).collect::<Vec<_>>(),
//! );
//! ```
//!
//! # Features
//!
//! - `std` (default): scalar math through the standard library.
//! - `libm`: scalar math through the `libm` crate instead, for `no_std`
//!   builds. One of `std` or `libm` must be enabled.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("quadrat_scatter requires either the `std` or `libm` feature");

mod math;

pub mod field;
pub mod render;
pub mod rng;

pub use field::{DEFAULT_MAX_DEPTH, DEFAULT_PADDING_RADIUS, DEFAULT_SEED, Field, FieldParams};
pub use render::{Layers, Outline, RenderList};
pub use rng::Sfc32;
