mod helpers;

use helpers::{
    setup::{setup_account, spawn_app},
    utils::{boat_listing, days_from_today},
};
use seaboo_sdk::{
    APIError, BookingStatus, BookingsQuery, CancelledBy, CreateBookingInput, DayStatus,
    GetAvailabilityInput,
};

fn stay(start: i64, end: i64, guests: u32) -> CreateBookingInput {
    CreateBookingInput {
        start_date: days_from_today(start),
        end_date: days_from_today(end),
        guests,
        boat_length_cm: None,
    }
}

#[actix_web::main]
#[test]
async fn test_booking_request_flow() {
    let (app, sdk, _) = spawn_app().await;
    let account = setup_account(&app, &sdk).await;
    let (owner_id, owner) = account.user(&app).await;
    let (customer_id, customer) = account.user(&app).await;
    let (_, other_customer) = account.user(&app).await;

    let listing = owner
        .listing
        .create(boat_listing("Beneteau Oceanis 51", 20_000))
        .await
        .expect("Expected to create listing")
        .listing;

    let booking = customer
        .booking
        .create(listing.id.clone(), stay(30, 33, 4))
        .await
        .expect("Expected to create booking")
        .booking;
    assert_eq!(booking.status, BookingStatus::Pending);
    assert_eq!(booking.customer_id, customer_id);
    assert_eq!(booking.owner_id, owner_id);
    assert_eq!(booking.nights, 3);
    assert_eq!(booking.total_price, 60_000);
    assert!(booking.expires_at.is_some());

    // Pending requests hold their nights
    assert!(matches!(
        other_customer
            .booking
            .create(listing.id.clone(), stay(31, 35, 2))
            .await,
        Err(APIError::Conflict)
    ));
    // Check-out day is free for the next check-in
    let back_to_back = other_customer
        .booking
        .create(listing.id.clone(), stay(33, 36, 2))
        .await
        .expect("Expected back to back booking")
        .booking;

    // Too many guests
    assert!(matches!(
        other_customer
            .booking
            .create(listing.id.clone(), stay(40, 42, 7))
            .await,
        Err(APIError::BadClientData)
    ));
    // Owners can not book their own listing
    assert!(matches!(
        owner.booking.create(listing.id.clone(), stay(40, 42, 2)).await,
        Err(APIError::BadClientData)
    ));
    // Only the owner answers requests
    assert!(matches!(
        customer.booking.confirm(booking.id.clone()).await,
        Err(APIError::NotFound)
    ));

    let confirmed = owner
        .booking
        .confirm(booking.id.clone())
        .await
        .expect("Expected to confirm booking")
        .booking;
    assert_eq!(confirmed.status, BookingStatus::Confirmed);
    assert!(confirmed.expires_at.is_none());
    assert!(matches!(
        owner.booking.decline(booking.id.clone()).await,
        Err(APIError::Conflict)
    ));

    let calendar = account
        .public(&app)
        .availability
        .calendar(GetAvailabilityInput {
            listing_id: listing.id.clone(),
            start_date: days_from_today(29),
            end_date: days_from_today(37),
        })
        .await
        .expect("Expected calendar")
        .availability;
    assert_eq!(calendar.days[0].status, DayStatus::Available);
    assert_eq!(
        calendar.days[1].status,
        DayStatus::Booked {
            booking_id: booking.id.clone()
        }
    );
    assert_eq!(
        calendar.days[4].status,
        DayStatus::Booked {
            booking_id: back_to_back.id.clone()
        }
    );
    assert_eq!(calendar.days[7].status, DayStatus::Available);

    let found = customer
        .booking
        .get(booking.id.clone())
        .await
        .expect("Expected customer to see booking")
        .booking;
    assert_eq!(found.status, BookingStatus::Confirmed);
    assert!(matches!(
        other_customer.booking.get(booking.id.clone()).await,
        Err(APIError::NotFound)
    ));

    let listing_bookings = owner
        .booking
        .by_listing(listing.id.clone(), BookingsQuery::default())
        .await
        .expect("Expected listing bookings")
        .bookings;
    assert_eq!(listing_bookings.len(), 2);
    let in_range = owner
        .booking
        .by_listing(
            listing.id.clone(),
            BookingsQuery {
                start_date: Some(days_from_today(34)),
                end_date: Some(days_from_today(40)),
            },
        )
        .await
        .expect("Expected listing bookings")
        .bookings;
    assert_eq!(in_range.len(), 1);
    assert_eq!(in_range[0].id, back_to_back.id);

    let mine = customer.booking.mine().await.expect("Expected bookings").bookings;
    assert_eq!(mine.len(), 1);

    let cancelled = customer
        .booking
        .cancel(booking.id.clone())
        .await
        .expect("Expected to cancel booking")
        .booking;
    assert_eq!(cancelled.status, BookingStatus::Cancelled);
    let cancellation = cancelled.cancellation.expect("Expected cancellation");
    assert_eq!(cancellation.by, CancelledBy::Customer);
    assert!(cancellation.refund_amount <= cancelled.total_price);

    // Cancelled nights are released
    assert!(other_customer
        .booking
        .create(listing.id.clone(), stay(30, 33, 2))
        .await
        .is_ok());

    // Only completed stays can be reviewed
    assert!(matches!(
        customer.review.create(booking.id, 5, None).await,
        Err(APIError::BadClientData)
    ));
    let reviews = account
        .public(&app)
        .review
        .by_listing(listing.id)
        .await
        .expect("Expected reviews");
    assert_eq!(reviews.summary.count, 0);
    assert!(reviews.reviews.is_empty());
}

#[actix_web::main]
#[test]
async fn test_admin_books_for_customer() {
    let (app, sdk, _) = spawn_app().await;
    let account = setup_account(&app, &sdk).await;
    let (owner_id, owner) = account.user(&app).await;
    let (customer_id, _) = account.user(&app).await;

    let mut input = boat_listing("Jeanneau Sun Odyssey 410", 30_000);
    input.rules = Some(seaboo_sdk::BookingRules {
        instant_book: true,
        ..Default::default()
    });
    let listing = owner
        .listing
        .create(input)
        .await
        .expect("Expected to create listing")
        .listing;

    let booking = account
        .admin
        .booking
        .create_for_user(customer_id.clone(), listing.id.clone(), stay(20, 27, 6))
        .await
        .expect("Expected to create booking")
        .booking;
    assert_eq!(booking.status, BookingStatus::Confirmed);
    assert_eq!(booking.customer_id, customer_id);
    assert_eq!(booking.total_price, 7 * 30_000);

    let customer_bookings = account
        .admin
        .booking
        .by_customer(customer_id)
        .await
        .expect("Expected bookings")
        .bookings;
    assert_eq!(customer_bookings.len(), 1);

    // The stay is still to come
    assert!(matches!(
        account.admin.user.delete(owner_id.clone()).await,
        Err(APIError::Conflict)
    ));

    let cancelled = account
        .admin
        .booking
        .cancel_as_admin(booking.id.clone())
        .await
        .expect("Expected to cancel booking")
        .booking;
    let cancellation = cancelled.cancellation.expect("Expected cancellation");
    assert_eq!(cancellation.by, CancelledBy::Account);
    assert_eq!(cancellation.refund_amount, booking.total_price);

    assert!(matches!(
        account.admin.booking.confirm_as_admin(booking.id).await,
        Err(APIError::Conflict)
    ));

    account
        .admin
        .user
        .delete(owner_id)
        .await
        .expect("Expected to delete owner without upcoming stays");
    assert!(matches!(
        account.public(&app).listing.get(listing.id).await,
        Err(APIError::NotFound)
    ));
}
