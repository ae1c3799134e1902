//! # visionsphere
//!
//! Client-side interactivity for the `VisionSphere` marketing site, compiled to
//! WebAssembly. The pages are static HTML; this crate adds reveal-on-scroll
//! effects, the journey scroll spy, hero parallax, lazy images, simulated form
//! submission, and the `VisionSphereUtils` helpers inline scripts call.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`util`] | Host-independent behavior, testable without a browser |
//! | [`config`] | `SiteConfig` defaults and JSON overrides |
//! | [`error`] | `SiteError` for browser wiring |
//! | `dom` | `web_sys` adapters, listeners and JS exports (feature `hydrate`) |
//!
//! Rate limiting of scroll handlers comes from the `pacing` crate and is
//! re-exported here as [`debounce`] and [`throttle`].

pub mod config;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod error;
pub mod util;

pub use pacing::{Debounced, Scheduler, Throttled, debounce, throttle};
pub use util::geometry::{Rect, Viewport, is_in_viewport, offset_top};
