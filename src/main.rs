#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use slipper_reviews::api::{create_review, list_reviews};
    use slipper_reviews::app::*;
    use slipper_reviews::config::AppConfig;
    use slipper_reviews::store::ReviewStore;

    // Load the review store; a corrupt file is fatal at startup
    let config = AppConfig::from_env();
    let store = ReviewStore::open(&config)
        .map_err(|e| {
            logging::error!(
                "[SERVER] Failed to load reviews from {}: {}",
                config.reviews_file.display(),
                e
            );
            std::io::Error::new(std::io::ErrorKind::InvalidData, e)
        })?
        .into_shared();

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    logging::log!("[SERVER] listening on http://{}", &addr);

    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(web::Data::new(store.clone()))
            // JSON endpoints, registered before the server function catch-all
            .route("/api/reviews", web::get().to(list_reviews))
            .route("/api/reviews", web::post().to(create_review))
            .route("/api/{tail:.*}", leptos_actix::handle_server_fns())
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // to run: `trunk serve --open --features csr`
    use slipper_reviews::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
