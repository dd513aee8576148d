//! The parameterization point for the generic resource client.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// One backend collection (events, notes, tasks).
///
/// The CRUD client is written once against this trait; each entity type
/// supplies its URL segment, the label used in error messages, and the
/// shapes of its create/update bodies. The bearer header, `userId`
/// stamping and cache upkeep live in the shared client.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// URL path segment under the API base, e.g. `"tasks"`.
    const SEGMENT: &'static str;

    /// Singular label used in error messages, e.g. `"task"`.
    const LABEL: &'static str;

    /// Body shape for `create`, before `userId` injection.
    type Draft: Serialize + Send + Sync;

    /// Body shape for `update`, before `userId` injection. All fields
    /// optional; unset fields are left untouched server-side.
    type Patch: Serialize + Send + Sync;

    /// Server-assigned stable identifier.
    fn id(&self) -> i64;
}
