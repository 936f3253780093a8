//! Client-side workflow over the posts API.
//!
//! # Design
//! [`PostApp`] ties the injected collaborators together: it reads the base
//! URL and the input fields from the display, persists the URL, executes one
//! HTTP round trip through the [`Transport`], and re-renders the whole list
//! on success. Every failure is logged and routed to the notice board; no
//! operation propagates an error to the caller, so the surface stays
//! interactive after any failure.
//!
//! The transport seam is synchronous and operations run one at a time, so a
//! stale response can never overwrite a newer render. Nothing retries;
//! every operation is at-most-once.

use crate::client::PostClient;
use crate::error::ClientError;
use crate::http::Transport;
use crate::notice::NoticeBoard;
use crate::surface::{ConfirmPrompt, DisplaySurface, SettingsStore};
use crate::types::NewPost;

/// The post-management workflow bound to its host surfaces.
pub struct PostApp<S, D, P, T> {
    settings: S,
    display: D,
    prompt: P,
    transport: T,
    notices: NoticeBoard,
}

impl<S, D, P, T> PostApp<S, D, P, T>
where
    S: SettingsStore,
    D: DisplaySurface,
    P: ConfirmPrompt,
    T: Transport,
{
    pub fn new(settings: S, display: D, prompt: P, transport: T) -> Self {
        Self {
            settings,
            display,
            prompt,
            transport,
            notices: NoticeBoard::new(),
        }
    }

    /// Startup hook: restore the persisted base URL and, when one exists,
    /// load the list. A missing or empty value is a normal case and does
    /// nothing. Never fails.
    pub fn initialize(&mut self) {
        match self.settings.load_base_url() {
            Some(url) if !url.is_empty() => {
                self.display.set_base_url(&url);
                self.refresh_posts();
            }
            _ => {}
        }
    }

    /// Fetch all posts and fully replace the rendered list.
    ///
    /// Persists the base URL currently in the display field before the
    /// request goes out; a reload is what commits a field edit. On failure
    /// the view is left untouched and a notice is shown.
    pub fn refresh_posts(&mut self) {
        if let Err(err) = self.try_refresh() {
            tracing::warn!(error = %err, "loading posts failed");
            self.notices.show(err.to_string());
        }
    }

    /// Validate the input fields and create a post. A blank field produces a
    /// field-specific notice and no request. On success both inputs are
    /// cleared and the list is refreshed once.
    pub fn submit_post(&mut self) {
        if let Err(err) = self.try_submit() {
            tracing::warn!(error = %err, "creating post failed");
            self.notices.show(err.to_string());
        }
    }

    /// Delete a post after interactive confirmation. Declining is a silent
    /// no-op. On success the list is refreshed once; on failure the view is
    /// left as it was.
    pub fn remove_post(&mut self, id: i64) {
        if !self.prompt.confirm_delete(id) {
            return;
        }
        if let Err(err) = self.try_remove(id) {
            tracing::warn!(error = %err, id, "deleting post failed");
            self.notices.show(err.to_string());
        }
    }

    /// The notice from the most recent failure, while it is still visible.
    pub fn visible_notice(&mut self) -> Option<&str> {
        self.notices.current()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Hosts push user edits (field values) through this before invoking an
    /// operation.
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    fn client(&self) -> PostClient {
        PostClient::new(&self.display.base_url())
    }

    fn try_refresh(&mut self) -> Result<(), ClientError> {
        let base_url = self.display.base_url();
        self.settings.save_base_url(&base_url);

        let client = PostClient::new(&base_url);
        let request = client.build_list_posts(None);
        let response = self.transport.execute(&request)?;
        let posts = client.parse_list_posts(response)?;
        tracing::debug!(count = posts.len(), "rendering post list");
        self.display.render_posts(&posts);
        Ok(())
    }

    fn try_submit(&mut self) -> Result<(), ClientError> {
        let input = NewPost {
            title: self.display.title(),
            content: self.display.content(),
        };
        let client = self.client();
        let request = client.build_create_post(&input)?;
        let response = self.transport.execute(&request)?;
        let created = client.parse_create_post(response)?;
        tracing::debug!(id = created.id, "post created");

        self.display.clear_post_inputs();
        // The refresh handles its own failure notice.
        self.refresh_posts();
        Ok(())
    }

    fn try_remove(&mut self, id: i64) -> Result<(), ClientError> {
        let client = self.client();
        let request = client.build_delete_post(id);
        let response = self.transport.execute(&request)?;
        let ack = client.parse_delete_post(response)?;
        match ack {
            Some(message) => tracing::debug!(id, message = %message, "post deleted"),
            None => tracing::debug!(id, "post deleted"),
        }
        self.refresh_posts();
        Ok(())
    }
}
