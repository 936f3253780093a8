//! Host collaborator seams.
//!
//! # Design
//! The surface the workflow runs against (input fields, the rendered list,
//! the settings slot, the confirmation dialog) is owned by the host, not by
//! this crate. Every collaborator is an explicit trait so the workflow can
//! run against in-memory fakes instead of a real display.

use crate::types::Post;

/// Durable storage for the configured API base URL.
///
/// Best-effort by contract: a missing value is a normal case and a failed
/// write must not interrupt the flow, so both signatures are infallible.
pub trait SettingsStore {
    /// The stored base URL, or None when nothing has been saved yet or the
    /// store cannot be read.
    fn load_base_url(&self) -> Option<String>;

    /// Persists the base URL. Implementations swallow write failures.
    fn save_base_url(&mut self, url: &str);
}

/// The host's rendering and input surface.
pub trait DisplaySurface {
    /// Current value of the base-URL field.
    fn base_url(&self) -> String;

    fn set_base_url(&mut self, url: &str);

    /// Current value of the title field.
    fn title(&self) -> String;

    /// Current value of the content field.
    fn content(&self) -> String;

    /// Empties the title and content fields after a successful create.
    fn clear_post_inputs(&mut self);

    /// Fully replaces the rendered list: every previously rendered block is
    /// dropped first. The workflow never issues incremental updates.
    fn render_posts(&mut self, posts: &[Post]);
}

/// Interactive yes/no gate in front of destructive actions.
pub trait ConfirmPrompt {
    fn confirm_delete(&mut self, id: i64) -> bool;
}
