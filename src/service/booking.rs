//! Booking engine: creation, reads, and lifecycle transitions.
//!
//! Every mutation runs in one transaction so the availability invariant
//! (a vehicle is `booked` exactly while at least one active booking
//! references it) holds at every commit point. Claims and closes are
//! conditional updates, so concurrent writers race on affected row counts
//! instead of on stale reads.

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use entity::booking::BookingStatus;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{booking::BookingRepository, user::UserRepository, vehicle::VehicleRepository},
    error::{booking::BookingError, AppError},
    middleware::{
        auth::Actor,
        policy::{authorize, BookingAction},
    },
    model::booking::{
        BookingDetailDto, CreateBookingParams, CreatedBookingDto, NewBookingRow, UpdatedBookingDto,
    },
    util::parse::{parse_rent_date, rental_days},
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking, claiming the vehicle in the same transaction.
    ///
    /// The rental price is `daily_rent_price * ceil(days)`, so any positive
    /// span bills at least one whole day.
    ///
    /// # Returns
    /// - `Ok(CreatedBookingDto)` - The created booking with a vehicle summary
    /// - `Err(BookingError::InvalidDateRange)` - Unparseable dates or end <= start
    /// - `Err(AppError::NotFound)` - Customer does not exist
    /// - `Err(BookingError::VehicleNotFound)` - Vehicle does not exist
    /// - `Err(BookingError::VehicleUnavailable)` - Vehicle already booked
    pub async fn create(&self, params: CreateBookingParams) -> Result<CreatedBookingDto, AppError> {
        let (Some(rent_start_date), Some(rent_end_date)) = (
            parse_rent_date(&params.rent_start_date),
            parse_rent_date(&params.rent_end_date),
        ) else {
            return Err(BookingError::InvalidDateRange.into());
        };

        if rent_end_date <= rent_start_date {
            return Err(BookingError::InvalidDateRange.into());
        }

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn)
            .find_by_id(params.customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        let vehicle_repo = VehicleRepository::new(&txn);

        let Some(vehicle) = vehicle_repo.find_by_id(params.vehicle_id).await? else {
            return Err(BookingError::VehicleNotFound.into());
        };

        // The conditional claim is the availability check. Two concurrent
        // creations for the same vehicle both reach this point; only the one
        // that flips the row proceeds.
        if !vehicle_repo.claim(params.vehicle_id).await? {
            return Err(BookingError::VehicleUnavailable.into());
        }

        let total_price =
            vehicle.daily_rent_price * rental_days(rent_start_date, rent_end_date) as f64;

        let booking = BookingRepository::new(&txn)
            .insert(NewBookingRow {
                customer_id: params.customer_id,
                vehicle_id: params.vehicle_id,
                rent_start_date,
                rent_end_date,
                total_price,
            })
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Created booking {} for customer {} on vehicle {}",
            booking.id,
            booking.customer_id,
            booking.vehicle_id
        );

        Ok(CreatedBookingDto::from_entity(booking, &vehicle))
    }

    /// Returns every booking, enriched with customer and vehicle summaries.
    pub async fn get_all(&self) -> Result<Vec<BookingDetailDto>, AppError> {
        let bookings = BookingRepository::new(self.db).get_all().await?;

        self.enrich(bookings).await
    }

    /// Returns one customer's bookings, enriched with summaries.
    pub async fn get_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<BookingDetailDto>, AppError> {
        let bookings = BookingRepository::new(self.db)
            .get_by_customer(customer_id)
            .await?;

        self.enrich(bookings).await
    }

    /// Returns a single booking, visible to admins and the owning customer.
    ///
    /// # Returns
    /// - `Ok(BookingDetailDto)` - The booking with summaries
    /// - `Err(BookingError::BookingNotFound)` - No booking with that id
    /// - `Err(AuthError::Forbidden)` - A customer reading someone else's booking
    pub async fn get_by_id(
        &self,
        actor: &Actor,
        booking_id: i32,
    ) -> Result<BookingDetailDto, AppError> {
        let Some(booking) = BookingRepository::new(self.db).find_by_id(booking_id).await? else {
            return Err(BookingError::BookingNotFound.into());
        };

        authorize(
            actor,
            &BookingAction::View {
                owner: booking.customer_id,
            },
            Utc::now(),
        )?;

        let mut enriched = self.enrich(vec![booking]).await?;

        enriched
            .pop()
            .ok_or_else(|| AppError::InternalError("Enrichment dropped a booking".to_string()))
    }

    /// Closes an active booking, moving it to `cancelled` or `returned`.
    ///
    /// Runs as one transaction: the status flip is guarded on the row still
    /// being active, and when the closed booking was the vehicle's last
    /// active one the vehicle is released before commit.
    ///
    /// # Returns
    /// - `Ok(UpdatedBookingDto)` - The closed booking; `vehicle` is present
    ///   when this close released it
    /// - `Err(AppError::BadRequest)` - Target status is `active`
    /// - `Err(BookingError::BookingNotFound)` - No booking with that id
    /// - `Err(BookingError::InvalidTransition)` - Booking is not active
    /// - `Err(AuthError::Forbidden)` - Role or ownership does not permit the close
    /// - `Err(AuthError::CancellationWindowClosed)` - Cancel after the rental started
    pub async fn update_status(
        &self,
        actor: &Actor,
        booking_id: i32,
        target: BookingStatus,
    ) -> Result<UpdatedBookingDto, AppError> {
        if target == BookingStatus::Active {
            return Err(AppError::BadRequest(
                "Status must be either 'cancelled' or 'returned'".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let booking_repo = BookingRepository::new(&txn);

        let Some(booking) = booking_repo.find_by_id(booking_id).await? else {
            return Err(BookingError::BookingNotFound.into());
        };

        if booking.status != BookingStatus::Active {
            return Err(BookingError::InvalidTransition.into());
        }

        let action = match target {
            BookingStatus::Cancelled => BookingAction::Cancel {
                owner: booking.customer_id,
                rent_start: booking.rent_start_date,
            },
            BookingStatus::Returned => BookingAction::Return,
            BookingStatus::Active => unreachable!("rejected above"),
        };

        authorize(actor, &action, Utc::now())?;

        // A concurrent close (or the auto-return sweep) may have won between
        // the read above and here; zero affected rows means this transition
        // already happened and must not re-run the release.
        if booking_repo.close_active(booking_id, target).await? == 0 {
            return Err(BookingError::InvalidTransition.into());
        }

        let vehicle_released = if booking_repo
            .has_active_for_vehicle(booking.vehicle_id)
            .await?
        {
            false
        } else {
            VehicleRepository::new(&txn)
                .release(booking.vehicle_id)
                .await?
                > 0
        };

        txn.commit().await?;

        tracing::info!(
            "Booking {} moved to {:?}, vehicle {} {}",
            booking_id,
            target,
            booking.vehicle_id,
            if vehicle_released {
                "released"
            } else {
                "still booked"
            }
        );

        let closed = entity::booking::Model {
            status: target,
            ..booking
        };

        Ok(UpdatedBookingDto::from_entity(closed, vehicle_released))
    }

    /// Attaches customer and vehicle summaries to a page of bookings.
    ///
    /// Referenced rows are fetched in two batched queries over the distinct
    /// id sets rather than per booking.
    async fn enrich(
        &self,
        bookings: Vec<entity::booking::Model>,
    ) -> Result<Vec<BookingDetailDto>, AppError> {
        let customer_ids: BTreeSet<i32> = bookings.iter().map(|b| b.customer_id).collect();
        let vehicle_ids: BTreeSet<i32> = bookings.iter().map(|b| b.vehicle_id).collect();

        let customers: HashMap<i32, entity::user::Model> = UserRepository::new(self.db)
            .find_by_ids(&customer_ids.into_iter().collect::<Vec<_>>())
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let vehicles: HashMap<i32, entity::vehicle::Model> = VehicleRepository::new(self.db)
            .find_by_ids(&vehicle_ids.into_iter().collect::<Vec<_>>())
            .await?
            .into_iter()
            .map(|v| (v.id, v))
            .collect();

        Ok(bookings
            .into_iter()
            .map(|booking| {
                let customer = customers.get(&booking.customer_id);
                let vehicle = vehicles.get(&booking.vehicle_id);
                BookingDetailDto::from_entity(booking, customer, vehicle)
            })
            .collect())
    }
}
