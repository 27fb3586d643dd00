//! Auto-return reconciler.
//!
//! Bookings whose rental period has ended are swept to `returned` on a
//! fixed timer, and vehicles whose last active booking was swept are
//! released. The sweep is a reconciliation, not an event: it recomputes the
//! expired set from current state on every run, so missed or doubled runs
//! converge to the same outcome.

use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::{booking::BookingRepository, vehicle::VehicleRepository},
    error::AppError,
};

/// What a single sweep did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOutcome {
    pub bookings_returned: u64,
    pub vehicles_released: u64,
}

/// Starts the auto-return scheduler.
///
/// The sweep runs every 15 minutes on UTC wall-clock boundaries. A failing
/// run is logged and the next run retries from current state.
///
/// # Arguments
/// - `db`: Database connection
///
/// # Returns
/// - `Ok(JobScheduler)` - Handle for shutting the timer down on exit
/// - `Err(AppError)` - Scheduler setup failure
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();

    let job = Job::new_async("0 */15 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = run_auto_return(&db).await {
                tracing::error!("Auto-return sweep failed: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Auto-return scheduler started");

    Ok(scheduler)
}

/// Runs one auto-return sweep.
///
/// In a single transaction: flips every active booking with
/// `rent_end_date < now` to `returned`, then releases each affected vehicle
/// that no longer has any active booking. Vehicles still covered by another
/// active booking stay `booked`.
///
/// # Returns
/// - `Ok(SweepOutcome)` - Counts of bookings returned and vehicles released
/// - `Err(AppError)` - Database error; the transaction rolls back
pub async fn run_auto_return(db: &DatabaseConnection) -> Result<SweepOutcome, AppError> {
    let now = Utc::now();

    let txn = db.begin().await?;

    let booking_repo = BookingRepository::new(&txn);

    let expired = booking_repo.find_expired_active(now).await?;

    if expired.is_empty() {
        tracing::info!("Auto-return: no bookings to update");
        return Ok(SweepOutcome {
            bookings_returned: 0,
            vehicles_released: 0,
        });
    }

    let bookings_returned = booking_repo.mark_expired_returned(now).await?;

    // Each affected vehicle is released only if the sweep closed its last
    // active booking. An overlapping active booking keeps it booked.
    let vehicle_ids: BTreeSet<i32> = expired.iter().map(|b| b.vehicle_id).collect();

    let vehicle_repo = VehicleRepository::new(&txn);
    let mut vehicles_released = 0;

    for vehicle_id in vehicle_ids {
        if !booking_repo.has_active_for_vehicle(vehicle_id).await? {
            vehicles_released += vehicle_repo.release(vehicle_id).await?;
        }
    }

    txn.commit().await?;

    tracing::info!(
        "Auto-return: {} bookings returned, {} vehicles released",
        bookings_returned,
        vehicles_released
    );

    Ok(SweepOutcome {
        bookings_returned,
        vehicles_released,
    })
}
