use leptos::*;
use crate::models::review::Review;

/// Every stored review, oldest first.
#[component]
pub fn ReviewsList(reviews: Resource<usize, Result<Vec<Review>, ServerFnError>>) -> impl IntoView {
    view! {
        <div>
            <h2 class="header">{ "What Our Customers Say" }</h2>
            <Transition fallback=move || view! { <p>{ "Loading reviews..." }</p> }>
                {move || reviews.get().map(|result| match result {
                    Ok(reviews) => reviews
                        .into_iter()
                        .map(|review| view! { <ReviewCard review=review /> })
                        .collect_view(),
                    Err(e) => view! {
                        <p class="error">{ format!("Could not load reviews: {}", e) }</p>
                    }.into_view(),
                })}
            </Transition>
        </div>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let display = review.view();
    let name = display.name.to_string();
    let product = display.product.to_string();
    let satisfaction = display.satisfaction;
    let feedback = display.feedback.to_string();

    view! {
        <div class="review">
            <strong>{ name }</strong>{ " reviewed the " }<strong>{ product }</strong>
            <p class="rating">{ format!("Satisfaction: {} ⭐", satisfaction) }</p>
            <p>{ feedback }</p>
        </div>
    }
}
