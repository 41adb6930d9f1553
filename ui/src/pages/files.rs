use leptos::prelude::*;

use crate::app::use_catalog;
use crate::components::{
    card::{Card, FilterChip, PageHeader, PageShell},
    status::{LoadFailed, Loading},
};
use crate::data::FileItem;
use crate::pages::load;

/// Distinct categories in first-seen order.
pub fn categories(files: &[FileItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for file in files {
        if !seen.contains(&file.category) {
            seen.push(file.category.clone());
        }
    }
    seen
}

/// `None` keeps everything.
pub fn in_category(files: &[FileItem], category: Option<&str>) -> Vec<FileItem> {
    files
        .iter()
        .filter(|f| category.is_none_or(|c| f.category == c))
        .cloned()
        .collect()
}

/// One downloadable file. `with_stats` adds the category and download count.
#[component]
pub fn FileRow(file: FileItem, #[prop(optional)] with_stats: bool) -> impl IntoView {
    view! {
        <Card class="flex items-center justify-between gap-4">
            <div class="flex items-center gap-4 min-w-0">
                <div class="text-4xl" aria-hidden="true">"📄"</div>
                <div class="min-w-0">
                    <h3 class="font-bold text-purple-900 truncate">{file.name.clone()}</h3>
                    <p class="text-sm text-purple-500">
                        <span dir="ltr">{file.size.clone()}</span>
                        {with_stats.then(|| view! {
                            " • " {file.category.clone()} " • " {file.downloads} " تحميل"
                        })}
                    </p>
                </div>
            </div>
            <a
                href=file.url.clone()
                download=file.name.clone()
                class="px-4 py-2 rounded-lg font-semibold bg-purple-100 text-purple-900 hover:bg-purple-200 transition-all whitespace-nowrap"
            >
                "⬇ تحميل"
            </a>
        </Card>
    }
}

#[component]
pub fn FilesPage() -> impl IntoView {
    let catalog = use_catalog();
    let files = LocalResource::new(move || load::files(catalog.clone()));
    let category = RwSignal::new(None::<String>);

    let chip = move |value: Option<String>| {
        let label = value.clone().unwrap_or_else(|| "الكل".to_owned());
        let selected = value.clone();
        view! {
            <FilterChip
                label
                active=Signal::derive(move || category.get() == value)
                on_select=move |_| category.set(selected.clone())
            />
        }
    };

    view! {
        <PageShell>
            <PageHeader title="الملفات" subtitle="ملخصات، تمارين وامتحانات جاهزة للتحميل"/>

            <Suspense fallback=|| view! { <Loading/> }>
                {move || match files.get() {
                    Some(Ok(list)) => {
                        let chips = std::iter::once(None)
                            .chain(categories(&list).into_iter().map(Some))
                            .map(chip)
                            .collect_view();
                        view! {
                            <div class="flex flex-wrap justify-center gap-4 mb-12">{chips}</div>
                            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                                <For
                                    each=move || in_category(&list, category.get().as_deref())
                                    key=|file| file.id
                                    children=|file| view! { <FileRow file with_stats=true/> }
                                />
                            </div>
                        }
                        .into_any()
                    }
                    Some(Err(error)) => view! { <LoadFailed error/> }.into_any(),
                    None => ().into_any(),
                }}
            </Suspense>
        </PageShell>
    }
}
