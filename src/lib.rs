//! Client library for the VALYGO admin dashboard.
//!
//! Every screen of the dashboard is a thin view over the admin backend's
//! REST API: a paginated, filterable list plus a handful of mutations. The
//! crate provides the pieces those screens share: the race-free list-view
//! core in [`listview`], the typed backend gateway in [`api`], and the
//! per-screen orchestration in [`services`]. Rendering, routing and theming
//! belong to the embedding UI, not to this crate.

#[cfg(feature = "http")]
pub mod api;
#[cfg(feature = "view")]
pub mod domain;
#[cfg(feature = "view")]
pub mod dto;
#[cfg(feature = "view")]
pub mod listview;
#[cfg(feature = "view")]
pub mod models;
#[cfg(feature = "http")]
pub mod services;
