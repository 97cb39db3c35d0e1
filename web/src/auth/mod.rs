//! Authentication
//!
//! Sign-in is handled by an identity-aware proxy in front of the service,
//! which passes the authenticated subject in a request header. The
//! middleware here only turns that header into a `CurrentUser`.

mod login_required;

pub use login_required::login_required;
