//! # NextAuth Dialog
//!
//! A reusable sign-in dialog for applications authenticating against a
//! NextAuth backend.
//!
//! This crate provides:
//! - Provider discovery through the backend's `/api/auth/providers` route
//! - Dioxus UI components: the dialog, the email field and the provider buttons
//! - Email validation with caller-replaceable validators
//! - A small client for NextAuth's sign-in routes
//!
//! ## Separation of Concerns
//!
//! This crate only starts sign-ins. It does **not**:
//! - Issue or verify tokens (handled by the backend)
//! - Store sessions (handled by the application)
//! - Retry failed requests
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use next_auth_dialog::{use_auth_client_provider, NextAuthClient, NextAuthDialog};
//!
//! // Once, near the root of the app
//! use_auth_client_provider(|| NextAuthClient::new("http://localhost:3000/api/auth").unwrap());
//!
//! // Anywhere below it
//! NextAuthDialog {
//!     open: true,
//!     config: DialogConfig {
//!         on_oauth_sign_in_error: Some(EventHandler::new(move |error| {
//!             // Handle error
//!         })),
//!         ..Default::default()
//!     },
//! }
//! ```

pub mod actions;
pub mod client;
pub mod components;
pub mod config;
pub mod email;
pub mod error;
pub mod icons;
pub mod loader;
pub mod models;
pub mod options;
pub mod state;
pub mod view;

pub use actions::{sign_in_with_provider, submit_email, SignInOutcome};
pub use client::{
    use_auth_client, use_auth_client_provider, AuthClient, AuthClientContext, NextAuthClient,
};
pub use components::{AuthDialog, AuthDialogProps, EmailField, NextAuthDialog, NextAuthDialogProps};
pub use config::{DialogConfig, DialogLabels, DialogStyles};
pub use email::{is_valid_email, EmailSubmitter, EmailValidator, Validation};
pub use error::AuthDialogError;
pub use icons::IconSource;
pub use loader::{normalize_providers, ProviderLoadState, ProviderLoader, DEFAULT_PROVIDERS_URL};
pub use models::{
    Breakpoint, ProviderConfig, ProviderKind, ProviderMapping, ProviderOverrides, SignInOptions,
    SignInResponse,
};
pub use state::{DialogState, EmailPhase};
pub use view::DialogView;
