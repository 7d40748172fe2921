use leptos::*;
use leptos::ev::SubmitEvent;
use crate::api::SubmitReview;
use crate::models::review::{Review, SATISFACTION_DEFAULT, SATISFACTION_MAX, SATISFACTION_MIN};

/// Review submission form. Inputs are cleared once the server has stored the review.
#[component]
pub fn ReviewForm(submit: Action<SubmitReview, Result<Review, ServerFnError>>) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (product, set_product) = create_signal(String::new());
    let (satisfaction, set_satisfaction) = create_signal(SATISFACTION_DEFAULT);
    let (feedback, set_feedback) = create_signal(String::new());

    // Reset values after a successful submission
    create_effect(move |_| {
        if let Some(Ok(_)) = submit.value().get() {
            set_name.set(String::new());
            set_product.set(String::new());
            set_satisfaction.set(SATISFACTION_DEFAULT);
            set_feedback.set(String::new());
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        submit.dispatch(SubmitReview {
            name: name.get(),
            product: product.get(),
            satisfaction: satisfaction.get(),
            feedback: feedback.get(),
        });
    };

    view! {
        <form class="form" on:submit=handle_submit>
            <h2 class="header">{ "We Value Your Feedback" }</h2>
            <label>{ "Your Name" }</label>
            <input
                type="text"
                placeholder="John Doe"
                prop:value=name
                on:input=move |e| set_name.set(event_target_value(&e))
            />
            <label>{ "Slipper Model" }</label>
            <input
                type="text"
                placeholder="Enter slipper model"
                prop:value=product
                on:input=move |e| set_product.set(event_target_value(&e))
            />
            <label>{ "Product Satisfaction (1 to 5)" }</label>
            <input
                type="range"
                min=SATISFACTION_MIN
                max=SATISFACTION_MAX
                prop:value=move || satisfaction.get().to_string()
                on:input=move |e| set_satisfaction.set(
                    event_target_value(&e).parse::<u8>().unwrap_or(SATISFACTION_DEFAULT)
                )
            />
            <span class="rating">{ satisfaction }</span>
            <label>{ "Additional Feedback" }</label>
            <textarea
                placeholder="Share your thoughts here..."
                prop:value=feedback
                on:input=move |e| set_feedback.set(event_target_value(&e))
            />
            <button type="submit" disabled=move || submit.pending().get()>{ "Submit Review" }</button>
            {move || match submit.value().get() {
                Some(Ok(_)) => view! { <p class="success">{ "Thank you for your feedback!" }</p> }.into_view(),
                Some(Err(e)) => view! { <p class="error">{ format!("Could not save your review: {}", e) }</p> }.into_view(),
                None => ().into_view(),
            }}
        </form>
    }
}
