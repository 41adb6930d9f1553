use leptos::prelude::*;

use crate::app::use_catalog;
use crate::components::{
    card::{Card, PageHeader, PageShell},
    status::{LoadFailed, Loading},
};
use crate::data::Video;
use crate::pages::load;

/// Title plus the platform's embed player, sized for the platform.
#[component]
pub fn VideoEmbed(video: Video) -> impl IntoView {
    let views = video.views_label();
    let Video { title, url, platform, .. } = video;

    view! {
        <Card>
            <div class="flex items-center justify-between mb-4 gap-4">
                <h3 class="text-lg font-bold text-purple-900">{title.clone()}</h3>
                <span class="text-xs font-semibold px-2 py-1 rounded-full bg-purple-100 text-purple-900">
                    {platform.label()}
                </span>
            </div>
            <div class="bg-purple-100 rounded-lg overflow-hidden">
                <iframe
                    class=platform.frame_class()
                    src=url
                    title=title
                    allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture"
                    allowfullscreen=true
                ></iframe>
            </div>
            {views.map(|v| view! { <p class="mt-3 text-sm text-purple-500">"👁 " {v} " مشاهدة"</p> })}
        </Card>
    }
}

#[component]
pub fn VideosPage() -> impl IntoView {
    let catalog = use_catalog();
    let videos = LocalResource::new(move || load::videos(catalog.clone()));

    view! {
        <PageShell>
            <PageHeader title="الفيديوهات" subtitle="شروحات مصورة ونصائح سريعة"/>

            <Suspense fallback=|| view! { <Loading/> }>
                {move || match videos.get() {
                    Some(Ok(list)) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            <For
                                each=move || list.clone()
                                key=|video| video.id
                                children=|video| view! { <VideoEmbed video/> }
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
