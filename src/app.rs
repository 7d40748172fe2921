/// Main application entry point for the slipper shop review page.
/// Combines the review form and the review list around a shared submit action.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::api::{get_reviews, SubmitReview};
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/slipper_reviews.css"/>
        <Title text="Slipper Shop Reviews"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=ReviewsPage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ReviewsPage() -> impl IntoView {
    let submit = create_server_action::<SubmitReview>();
    // Refetch the list every time a submission completes
    let reviews = create_resource(move || submit.version().get(), |_| get_reviews());

    view! {
        <h1 class="title">{ "Slipper Shop Reviews" }</h1>
        <ReviewForm submit=submit />
        <ReviewsList reviews=reviews />
        <div class="footer">{ "Thank you for visiting our Slipper Shop!" }</div>
    }
}
