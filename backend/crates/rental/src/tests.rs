//! Use-case and HTTP tests for the rental crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use kernel::id::{ConsoleId, UserId};
    use rust_decimal::Decimal;

    use crate::application::{ListConsolesUseCase, RentConsoleInput, RentConsoleUseCase};
    use crate::domain::value_objects::{Availability, RentalStatus};
    use crate::error::RentalError;
    use crate::testing::{InMemoryRentalRepository, console};

    fn repo() -> Arc<InMemoryRentalRepository> {
        Arc::new(InMemoryRentalRepository::with_consoles(vec![
            console(3, "PS5 Digital", Availability::Available, 75_000),
            console(1, "PS4 Pro", Availability::Available, 50_000),
            console(2, "PS3 Slim", Availability::Unavailable, 30_000),
        ]))
    }

    fn input(console_id: i64, rental_date: &str, return_date: &str) -> RentConsoleInput {
        RentConsoleInput {
            user_id: UserId::new(10),
            console_id: ConsoleId::new(console_id),
            rental_date: rental_date.to_string(),
            return_date: return_date.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_returns_available_ordered_by_id() {
        let consoles = ListConsolesUseCase::new(repo()).execute().await.unwrap();
        let ids: Vec<i64> = consoles.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_rent_computes_cost_and_flips_availability() {
        let repo = repo();
        let rental = RentConsoleUseCase::new(repo.clone())
            .execute(input(1, "2024-01-01", "2024-01-04"))
            .await
            .unwrap();

        assert_eq!(rental.rental_cost, Decimal::from(150_000));
        assert_eq!(rental.status, RentalStatus::Rented);
        assert_eq!(rental.user_id, UserId::new(10));
        assert_eq!(repo.availability_of(ConsoleId::new(1)), Some(Availability::Unavailable));
        assert_eq!(repo.history().len(), 1);

        let listed = ListConsolesUseCase::new(repo.clone()).execute().await.unwrap();
        assert!(listed.iter().all(|c| c.id != ConsoleId::new(1)));
    }

    #[tokio::test]
    async fn test_rent_unavailable_or_unknown_console_is_not_found() {
        let repo = repo();
        let use_case = RentConsoleUseCase::new(repo.clone());

        for id in [2, 99] {
            let err = use_case
                .execute(input(id, "2024-01-01", "2024-01-04"))
                .await
                .unwrap_err();
            assert!(matches!(err, RentalError::ConsoleNotFound));
        }
        assert!(repo.history().is_empty());
    }

    #[tokio::test]
    async fn test_console_lookup_precedes_date_validation() {
        let err = RentConsoleUseCase::new(repo())
            .execute(input(2, "bad", "bad"))
            .await
            .unwrap_err();
        assert!(matches!(err, RentalError::ConsoleNotFound));
    }

    #[tokio::test]
    async fn test_rent_rejects_bad_dates_without_side_effects() {
        let repo = repo();
        let use_case = RentConsoleUseCase::new(repo.clone());

        let cases = [
            ("2024/01/01", "2024-01-04", "rental"),
            ("2024-01-01", "tomorrow", "return"),
            ("2024-01-04", "2024-01-04", "period"),
            ("2024-01-04", "2024-01-01", "period"),
        ];

        for (rental_date, return_date, expected) in cases {
            let err = use_case
                .execute(input(1, rental_date, return_date))
                .await
                .unwrap_err();
            let ok = match expected {
                "rental" => matches!(err, RentalError::InvalidRentalDate),
                "return" => matches!(err, RentalError::InvalidReturnDate),
                _ => matches!(err, RentalError::InvalidPeriod),
            };
            assert!(ok, "{rental_date} -> {return_date} gave {err:?}");
        }

        assert_eq!(repo.availability_of(ConsoleId::new(1)), Some(Availability::Available));
        assert!(repo.history().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_rent_exactly_one_wins() {
        let repo = repo();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let use_case = RentConsoleUseCase::new(repo.clone());
                tokio::spawn(async move {
                    use_case.execute(input(3, "2024-05-01", "2024-05-03")).await
                })
            })
            .collect();

        let mut wins = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(rental) => {
                    wins += 1;
                    assert_eq!(rental.rental_cost, Decimal::from(150_000));
                }
                Err(err) => assert!(matches!(err, RentalError::ConsoleNotFound)),
            }
        }

        assert_eq!(wins, 1);
        assert_eq!(repo.history().len(), 1);
    }
}

#[cfg(test)]
mod handler_tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::{Extension, Router};
    use http_body_util::BodyExt;
    use kernel::id::UserId;
    use kernel::principal::Principal;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::domain::value_objects::Availability;
    use crate::presentation::router::rental_router_generic;
    use crate::testing::{InMemoryRentalRepository, console};

    fn app() -> Router {
        let repo = InMemoryRentalRepository::with_consoles(vec![
            console(1, "PS4 Pro", Availability::Available, 50_000),
            console(2, "PS3 Slim", Availability::Unavailable, 30_000),
        ]);

        // stands in for the bearer middleware
        rental_router_generic(repo).layer(Extension(Principal::new(
            UserId::new(10),
            "gamer@example.com",
        )))
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    fn rent(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/rent")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_consoles_json_shape() {
        let app = app();
        let req = Request::builder().uri("/console").body(Body::empty()).unwrap();

        let (status, body) = send(&app, req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{
                "id": 1,
                "name": "PS4 Pro",
                "availability": "Available",
                "rentalcosts": 50000.0,
                "category": "PlayStation"
            }])
        );
    }

    #[tokio::test]
    async fn test_rent_success_then_not_found() {
        let app = app();
        let body = r#"{"console_id": 1, "rental_date": "2024-01-01", "return_date": "2024-01-04"}"#;

        let (status, json) = send(&app, rent(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Console rented successfully");
        assert_eq!(json["rental_cost"], 150000.0);

        let (status, json) = send(&app, rent(body)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Console not found or unavailable");
    }

    #[tokio::test]
    async fn test_rent_bad_input() {
        let app = app();

        let (status, json) = send(
            &app,
            rent(r#"{"console_id": 1, "rental_date": "01-01-2024", "return_date": "2024-01-04"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid rental date format");

        let (status, json) = send(&app, rent(r#"{"rental_date": "2024-01-01"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Invalid request data");

        let (status, _) = send(&app, rent("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}

/// Against a real database: `DATABASE_URL=... cargo test -p rental -- --ignored`
#[cfg(test)]
mod postgres_tests {
    use std::sync::Arc;

    use kernel::id::{ConsoleId, UserId};
    use sqlx::PgPool;

    use crate::application::{RentConsoleInput, RentConsoleUseCase};
    use crate::error::RentalError;
    use crate::infra::postgres::PgRentalRepository;

    async fn insert_user(pool: &PgPool) -> UserId {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO users (email, password) VALUES ('gamer@example.com', 'x') RETURNING id",
        )
        .fetch_one(pool)
        .await
        .unwrap();
        UserId::new(id)
    }

    fn input(user_id: UserId) -> RentConsoleInput {
        RentConsoleInput {
            user_id,
            console_id: ConsoleId::new(1),
            rental_date: "2024-01-01".to_string(),
            return_date: "2024-01-04".to_string(),
        }
    }

    async fn history_count(pool: &PgPool) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM history_rentals WHERE rental_id = 1")
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn test_conditional_update_admits_one_concurrent_renter(pool: PgPool) {
        let user_id = insert_user(&pool).await;
        let use_case = RentConsoleUseCase::new(Arc::new(PgRentalRepository::new(pool.clone())));

        let (first, second) =
            tokio::join!(use_case.execute(input(user_id)), use_case.execute(input(user_id)));

        let results = [first, second];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(
            results
                .iter()
                .any(|r| matches!(r, Err(RentalError::ConsoleNotFound)))
        );
        assert_eq!(history_count(&pool).await, 1);

        let availability: String =
            sqlx::query_scalar("SELECT availability FROM rental_playstations WHERE id = 1")
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(availability, "Unavailable");
    }

    #[sqlx::test(migrations = "../../../database/migrations")]
    #[ignore = "needs a PostgreSQL DATABASE_URL"]
    async fn test_history_rows_are_immutable(pool: PgPool) {
        let user_id = insert_user(&pool).await;
        RentConsoleUseCase::new(Arc::new(PgRentalRepository::new(pool.clone())))
            .execute(input(user_id))
            .await
            .unwrap();

        let update = sqlx::query("UPDATE history_rentals SET status = 'Rented'")
            .execute(&pool)
            .await;
        assert!(update.is_err());
        assert_eq!(history_count(&pool).await, 1);
    }
}
