//! Access control gate for booking mutations.
//!
//! A single decision table over `{role, action, ownership, timing}`. The
//! booking service consults it inside the transaction that performs the
//! mutation, so the ownership and timing facts it sees are the ones being
//! committed. It deliberately knows nothing about sessions or HTTP.

use chrono::{DateTime, Utc};
use entity::user::UserRole;

use crate::{error::auth::AuthError, middleware::auth::Actor};

/// A booking action a verified identity is requesting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    /// Create a booking. Ownership is pinned by the controller, which forces
    /// a customer's `customer_id` to their own id before this check.
    Create,
    /// List every booking in the system.
    ListAll,
    /// Read one booking owned by `owner`.
    View { owner: i32 },
    /// Cancel an active booking owned by `owner` that starts at `rent_start`.
    Cancel {
        owner: i32,
        rent_start: DateTime<Utc>,
    },
    /// Mark an active booking as returned.
    Return,
}

/// Decides whether `actor` may perform `action` at instant `now`.
///
/// # Returns
/// - `Ok(())` - Permitted
/// - `Err(AuthError::Forbidden)` - Role or ownership mismatch
/// - `Err(AuthError::CancellationWindowClosed)` - Owner cancelling too late
pub fn authorize(actor: &Actor, action: &BookingAction, now: DateTime<Utc>) -> Result<(), AuthError> {
    match (actor.role, action) {
        // Any authenticated identity can create a booking.
        (_, BookingAction::Create) => Ok(()),

        (UserRole::Admin, BookingAction::ListAll) => Ok(()),
        (UserRole::Customer, BookingAction::ListAll) => Err(AuthError::Forbidden(format!(
            "Customer {} attempted to list all bookings",
            actor.id
        ))),

        (UserRole::Admin, BookingAction::View { .. }) => Ok(()),
        (UserRole::Customer, BookingAction::View { owner }) => {
            if *owner == actor.id {
                Ok(())
            } else {
                Err(AuthError::Forbidden(format!(
                    "Customer {} attempted to view booking owned by {}",
                    actor.id, owner
                )))
            }
        }

        // Cancellation belongs to the owning customer, and only before the
        // rental starts. Admins use `returned` instead.
        (UserRole::Admin, BookingAction::Cancel { .. }) => Err(AuthError::Forbidden(format!(
            "Admin {} attempted to cancel a booking; only the owning customer can",
            actor.id
        ))),
        (UserRole::Customer, BookingAction::Cancel { owner, rent_start }) => {
            if *owner != actor.id {
                return Err(AuthError::Forbidden(format!(
                    "Customer {} attempted to cancel booking owned by {}",
                    actor.id, owner
                )));
            }
            if now >= *rent_start {
                return Err(AuthError::CancellationWindowClosed);
            }
            Ok(())
        }

        (UserRole::Admin, BookingAction::Return) => Ok(()),
        (UserRole::Customer, BookingAction::Return) => Err(AuthError::Forbidden(format!(
            "Customer {} attempted to mark a booking as returned",
            actor.id
        ))),
    }
}
