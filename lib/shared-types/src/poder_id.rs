use serde::{Deserialize, Serialize};

use crate::macros::impls_for_integer_newtype;
#[cfg(feature = "sea-orm")]
use crate::macros::impls_for_seaorm_integer_newtype;

/// Row id of a submitted poder, assigned by storage
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(transparent)]
#[repr(transparent)]
pub struct PoderId(i64);

impls_for_integer_newtype!(PoderId);

#[cfg(feature = "sea-orm")]
impls_for_seaorm_integer_newtype!(PoderId);
