//! Navigation guard: decides, per target path, whether to proceed or
//! redirect, from the session alone.

use agendo_core::session::Session;

use crate::store::SessionStore;

/// Where an authenticated user lands when visiting a public page.
pub const LANDING_PATH: &str = "/inicio";
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";

/// Pages reachable without a session. Matching is exact, so `/auth/login/`
/// with a trailing slash counts as protected.
const PUBLIC_PATHS: [&str; 3] = ["/", LOGIN_PATH, REGISTER_PATH];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Public,
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

pub fn classify(path: &str) -> PathKind {
    if PUBLIC_PATHS.contains(&path) {
        PathKind::Public
    } else {
        PathKind::Protected
    }
}

/// Pure decision: logged-in visitors skip the public pages and land on
/// [`LANDING_PATH`]; logged-out visitors are sent to [`LOGIN_PATH`] from
/// anywhere protected.
pub fn evaluate(path: &str, session: Option<&Session>) -> GuardDecision {
    let authenticated = session.is_some_and(Session::is_authenticated);

    match (classify(path), authenticated) {
        (PathKind::Public, true) => GuardDecision::Redirect(LANDING_PATH),
        (PathKind::Protected, false) => GuardDecision::Redirect(LOGIN_PATH),
        _ => GuardDecision::Allow,
    }
}

/// Decision against the store's current contents, read fresh on every
/// navigation. A store that cannot be read counts as logged out.
pub fn check(store: &SessionStore, path: &str) -> GuardDecision {
    let session = store.load().ok().flatten();
    evaluate(path, session.as_ref())
}
