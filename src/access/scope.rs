// Row-level scoping rules
//
// Every check receives the caller identity the guard validated and the
// owning client_id of the row in question. Violations are `Forbidden`,
// never `NotFound`: a caller must not learn whether someone else's row
// exists.

use crate::auth::guard::CurrentUser;
use crate::core::error::ResourceError;
use crate::models::user::Role;
use uuid::Uuid;

/// The client row linked to a `Role::Client` caller.
///
/// A client account without a linked row can own nothing, so any
/// ownership-scoped operation is forbidden for it.
pub fn linked_client_id(user: &CurrentUser) -> Result<Uuid, ResourceError> {
    user.client_id.ok_or(ResourceError::Forbidden)
}

/// Read access to a row owned by `owner`.
///
/// admin and mechanic read everything; a client only their own rows.
pub fn ensure_can_view(user: &CurrentUser, owner: Uuid) -> Result<(), ResourceError> {
    match user.role {
        Role::Admin | Role::Mechanic => Ok(()),
        Role::Client => {
            if linked_client_id(user)? == owner {
                Ok(())
            } else {
                Err(ResourceError::Forbidden)
            }
        }
    }
}

/// Write access to an ownership-scoped row (clients, vehicles).
///
/// admin writes everything; a client only their own rows; mechanics are
/// read-only here.
pub fn ensure_can_modify(user: &CurrentUser, owner: Uuid) -> Result<(), ResourceError> {
    match user.role {
        Role::Admin => Ok(()),
        Role::Mechanic => Err(ResourceError::Forbidden),
        Role::Client => {
            if linked_client_id(user)? == owner {
                Ok(())
            } else {
                Err(ResourceError::Forbidden)
            }
        }
    }
}

/// Appointment updates: mechanics also get write access (status, notes).
pub fn ensure_can_update_appointment(user: &CurrentUser, owner: Uuid) -> Result<(), ResourceError> {
    match user.role {
        Role::Admin | Role::Mechanic => Ok(()),
        Role::Client => {
            if linked_client_id(user)? == owner {
                Ok(())
            } else {
                Err(ResourceError::Forbidden)
            }
        }
    }
}

/// Invoice mutation is admin-only; mechanics may read but never edit.
pub fn ensure_can_edit_invoices(user: &CurrentUser) -> Result<(), ResourceError> {
    ensure_admin(user)
}

pub fn ensure_admin(user: &CurrentUser) -> Result<(), ResourceError> {
    match user.role {
        Role::Admin => Ok(()),
        _ => Err(ResourceError::Forbidden),
    }
}

/// Error for a row that does not exist.
///
/// `NotFound` is only revealed to callers with global visibility (admin,
/// mechanic). A client gets the same `Forbidden` as for a foreign row, so
/// 403 vs 404 never discloses whether an id exists.
pub fn missing_row_error(user: &CurrentUser, what: &str) -> ResourceError {
    match user.role {
        Role::Admin | Role::Mechanic => ResourceError::NotFound(what.to_string()),
        Role::Client => ResourceError::Forbidden,
    }
}
