use crate::models::review::Review;
use leptos::*;

#[cfg(feature = "ssr")]
use crate::models::review::NewReview;
#[cfg(feature = "ssr")]
use crate::store::SharedStore;
#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use leptos::logging::log;

/// All reviews, oldest first.
#[server(GetReviews, "/api")]
pub async fn get_reviews() -> Result<Vec<Review>, ServerFnError> {
    let store: web::Data<SharedStore> = leptos_actix::extract().await?;
    let store = store.lock().await;
    Ok(store.reviews().to_vec())
}

/// Store a review from the form and return it as persisted.
#[server(SubmitReview, "/api")]
pub async fn submit_review(
    name: String,
    product: String,
    satisfaction: u8,
    feedback: String,
) -> Result<Review, ServerFnError> {
    let store: web::Data<SharedStore> = leptos_actix::extract().await?;
    let review = NewReview {
        name,
        product,
        satisfaction,
        feedback,
    }
    .into_review();
    append_review(&store, review)
        .await
        .map_err(ServerFnError::ServerError)
}

#[cfg(feature = "ssr")]
async fn append_review(store: &SharedStore, review: Review) -> Result<Review, String> {
    // The rewrite is blocking file I/O, so run it off the worker thread
    let store = store.clone();
    let stored = review.clone();
    let result = web::block(move || {
        let mut store = store.blocking_lock();
        store.append(stored).map(|()| store.len())
    })
    .await;

    match result {
        Ok(Ok(count)) => {
            log!("[API] Stored review #{} for product {:?}", count, review.product);
            Ok(review)
        }
        Ok(Err(e)) => {
            leptos::logging::error!("[API] Failed to store review: {}", e);
            Err(format!("Failed to store review: {}", e))
        }
        Err(e) => {
            leptos::logging::error!("[API] Review write task failed: {}", e);
            Err(format!("Failed to store review: {}", e))
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn list_reviews(store: web::Data<SharedStore>) -> HttpResponse {
    let store = store.lock().await;
    log!("[API] Returning {} reviews", store.len());
    HttpResponse::Ok().json(store.reviews())
}

#[cfg(feature = "ssr")]
pub async fn create_review(
    store: web::Data<SharedStore>,
    request: web::Json<NewReview>,
) -> HttpResponse {
    let review = request.into_inner().into_review();
    match append_review(&store, review).await {
        Ok(review) => HttpResponse::Ok().json(review),
        Err(message) => HttpResponse::InternalServerError().body(message),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::store::{load, ReviewStore};
    use actix_web::{test, App};

    fn shared_store(dir: &tempfile::TempDir) -> SharedStore {
        let config = AppConfig::new(dir.path().join("reviews.csv"));
        ReviewStore::open(&config).unwrap().into_shared()
    }

    #[actix_web::test]
    async fn test_create_then_list_reviews() {
        let dir = tempfile::tempdir().unwrap();
        let store = shared_store(&dir);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .route("/api/reviews", web::get().to(list_reviews))
                .route("/api/reviews", web::post().to(create_review)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reviews")
            .set_json(serde_json::json!({
                "name": "Ava",
                "product": "CloudWalk",
                "satisfaction": 5,
                "feedback": "Great!"
            }))
            .to_request();
        let created: Review = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created, Review::new("Ava", "CloudWalk", 5, "Great!"));

        let req = test::TestRequest::get().uri("/api/reviews").to_request();
        let listed: Vec<Review> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed, vec![created.clone()]);

        let path = dir.path().join("reviews.csv");
        assert_eq!(load(&path).unwrap(), vec![created]);
    }

    #[actix_web::test]
    async fn test_create_review_clamps_out_of_range_score() {
        let dir = tempfile::tempdir().unwrap();
        let store = shared_store(&dir);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .route("/api/reviews", web::post().to(create_review)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reviews")
            .set_json(serde_json::json!({
                "name": "",
                "product": "",
                "satisfaction": 12,
                "feedback": ""
            }))
            .to_request();
        let created: Review = test::call_and_read_body_json(&app, req).await;
        assert_eq!(created.satisfaction, Some(5));
        assert_eq!(created.name.as_deref(), Some(""));
    }

    #[actix_web::test]
    async fn test_create_review_reports_persist_failure() {
        let dir = tempfile::tempdir().unwrap();
        let store = shared_store(&dir);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .route("/api/reviews", web::post().to(create_review)),
        )
        .await;

        // A non-empty directory at the target path makes the rename fail
        let target = dir.path().join("reviews.csv");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("blocker"), "x").unwrap();

        let req = test::TestRequest::post()
            .uri("/api/reviews")
            .set_json(serde_json::json!({
                "name": "Ava",
                "product": "CloudWalk",
                "satisfaction": 3,
                "feedback": ""
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.lock().await.len(), 1);
    }

    #[actix_web::test]
    async fn test_repeated_submissions_persist_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = shared_store(&dir);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store.clone()))
                .route("/api/reviews", web::post().to(create_review)),
        )
        .await;

        for (name, score) in [("Ava", 5), ("Sam", 2), ("Kim", 4)] {
            let req = test::TestRequest::post()
                .uri("/api/reviews")
                .set_json(serde_json::json!({
                    "name": name,
                    "product": "Slide",
                    "satisfaction": score,
                    "feedback": ""
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert!(resp.status().is_success());
        }

        let names: Vec<_> = load(&dir.path().join("reviews.csv"))
            .unwrap()
            .into_iter()
            .filter_map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Ava", "Sam", "Kim"]);
        // The blocking write released the lock
        assert_eq!(store.lock().await.len(), 3);
    }
}
