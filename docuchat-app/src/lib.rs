//! DocuChat App - client-side state for the chat view
//!
//! Three disjoint state slices plus the per-view session that owns them:
//!
//! - [`ConversationStore`]: the ordered message list and loading flag
//! - [`UploadCoordinator`]: the visible document list and upload batches
//! - [`ThemeSelector`]: the selected UI theme
//!
//! All state is session-scoped: created when the view mounts, discarded
//! when it unmounts. Nothing here persists.

pub mod conversation;
pub mod session;
pub mod theme;
pub mod uploads;

pub use conversation::ConversationStore;
pub use session::AppSession;
pub use theme::ThemeSelector;
pub use uploads::UploadCoordinator;
