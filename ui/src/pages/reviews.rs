use leptos::prelude::*;

use crate::app::use_catalog;
use crate::components::{
    card::{Card, PageHeader, PageShell},
    status::{LoadFailed, Loading},
};
use crate::data::{Review, average_rating};
use crate::pages::load;

#[component]
fn Summary(reviews: Vec<Review>) -> impl IntoView {
    let average = average_rating(&reviews);

    view! {
        <Card class="max-w-md mx-auto mb-12 text-center">
            <div class="text-5xl font-bold text-purple-900 mb-2">
                {average.map(|a| format!("{a:.1}")).unwrap_or_else(|| "–".to_owned())}
            </div>
            <div class="text-2xl text-yellow-500 mb-2">
                {average.map(|a| "★".repeat(a.round() as usize))}
            </div>
            <p class="text-purple-600">{reviews.len()} " تقييم"</p>
        </Card>
    }
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <Card>
            <div class="flex items-center justify-between mb-3">
                <h3 class="font-bold text-purple-900">{review.student.clone()}</h3>
                <span class="text-yellow-500" aria-label=format!("{}/5", review.rating)>
                    {review.stars()}
                </span>
            </div>
            <p class="text-purple-700 mb-4">{review.comment.clone()}</p>
            <p class="text-sm text-purple-400" dir="ltr">{review.date_label()}</p>
        </Card>
    }
}

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let catalog = use_catalog();
    let reviews = LocalResource::new(move || load::reviews(catalog.clone()));

    view! {
        <PageShell>
            <PageHeader title="آراء الطلاب" subtitle="ماذا يقول طلابنا عن الدروس"/>

            <Suspense fallback=|| view! { <Loading/> }>
                {move || match reviews.get() {
                    Some(Ok(list)) => view! {
                        <Summary reviews=list.clone()/>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                            <For
                                each=move || list.clone()
                                key=|review| review.id
                                children=|review| view! { <ReviewCard review/> }
                            />
                        </div>
                    }
                    .into_any(),
                    Some(Err(error)) => view! { <LoadFailed error/> }.into_any(),
                    None => ().into_any(),
                }}
            </Suspense>
        </PageShell>
    }
}
