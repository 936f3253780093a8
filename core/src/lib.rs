//! Client core for a blog post service.
//!
//! # Overview
//! Lists, creates, and deletes posts against a user-configurable HTTP base
//! URL, persisting that URL across sessions and rendering results into a
//! host-provided display surface. Failures surface as transient notices
//! that auto-expire; the workflow never panics and never dies on a bad
//! response.
//!
//! # Design
//! - The I/O boundary is explicit (host-does-IO): [`PostClient`] builds
//!   [`HttpRequest`] values and parses [`HttpResponse`] values, and a
//!   host-implemented [`Transport`] executes the round trip.
//! - [`PostApp`] drives the workflow against injected collaborator traits
//!   ([`SettingsStore`], [`DisplaySurface`], [`ConfirmPrompt`]) so it runs
//!   unchanged against a real surface or in-memory fakes.
//! - Every operation is at-most-once: no retries, no request cancellation.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod notice;
pub mod settings;
pub mod surface;
pub mod types;

pub use app::PostApp;
pub use client::PostClient;
pub use error::{ClientError, Field};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use notice::{NoticeBoard, TransientNotice, NOTICE_TTL};
pub use settings::FileSettings;
pub use surface::{ConfirmPrompt, DisplaySurface, SettingsStore};
pub use types::{ListSort, NewPost, Post, PostPatch, SearchQuery, SortDirection, SortField};
