use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::use_catalog;
use crate::components::{
    card::{Card, PageHeader, PageShell},
    field::{Input, Textarea},
};
use crate::config::PROFILE;
use crate::data::{ContactField, ContactMessage};
use crate::error::Error;

/// How long the "sent" banner stays up.
#[cfg(feature = "web")]
const NOTICE_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub enum SendStatus {
    Idle,
    Sending,
    Sent,
    Rejected(ContactField),
    Failed(String),
}

/// Form fields, one signal each.
#[derive(Debug, Copy, Clone)]
pub struct ContactDraft {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub message: RwSignal<String>,
}

impl ContactDraft {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
        }
    }

    /// Current field values, trimmed; a blank phone becomes `None`.
    pub fn snapshot(&self) -> ContactMessage {
        let phone = self.phone.get_untracked().trim().to_owned();
        ContactMessage {
            name: self.name.get_untracked().trim().to_owned(),
            email: self.email.get_untracked().trim().to_owned(),
            phone: (!phone.is_empty()).then_some(phone),
            message: self.message.get_untracked().trim().to_owned(),
        }
    }

    pub fn clear(&self) {
        for field in [self.name, self.email, self.phone, self.message] {
            field.set(String::new());
        }
    }
}

impl Default for ContactDraft {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
fn StatusBanner(status: RwSignal<SendStatus>) -> impl IntoView {
    move || match status.get() {
        SendStatus::Idle | SendStatus::Sending => None,
        SendStatus::Sent => Some(view! {
            <p class="mb-4 p-3 rounded-lg bg-green-50 text-green-700 font-semibold">
                "تم إرسال رسالتك بنجاح، سنتواصل معك قريباً."
            </p>
        }
        .into_any()),
        SendStatus::Rejected(field) => Some(view! {
            <p class="mb-4 p-3 rounded-lg bg-red-50 text-red-700 font-semibold">{field.problem()}</p>
        }
        .into_any()),
        SendStatus::Failed(reason) => Some(view! {
            <p class="mb-4 p-3 rounded-lg bg-red-50 text-red-700">
                "تعذر إرسال الرسالة. " <span class="text-sm" dir="ltr">{reason}</span>
            </p>
        }
        .into_any()),
    }
}

#[component]
fn ContactDetails() -> impl IntoView {
    view! {
        <Card>
            <h2 class="text-2xl font-bold text-purple-900 mb-6">"معلومات التواصل"</h2>
            <div class="space-y-4 text-purple-700">
                <a href=format!("tel:{}", PROFILE.phone.replace(' ', "")) class="flex items-center gap-3 hover:text-purple-900">
                    <span class="text-2xl" aria-hidden="true">"☎"</span>
                    <span dir="ltr">{PROFILE.phone}</span>
                </a>
                <a href=format!("mailto:{}", PROFILE.email) class="flex items-center gap-3 hover:text-purple-900">
                    <span class="text-2xl" aria-hidden="true">"✉"</span>
                    <span>{PROFILE.email}</span>
                </a>
            </div>
        </Card>
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let catalog = use_catalog();
    let draft = ContactDraft::new();
    let status = RwSignal::new(SendStatus::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SendStatus::Sending {
            return;
        }

        let message = draft.snapshot();
        if let Err(Error::Validation { field }) = message.validate() {
            status.set(SendStatus::Rejected(field));
            return;
        }

        status.set(SendStatus::Sending);
        let catalog = catalog.clone();
        spawn_local(async move {
            match catalog.send_message(&message).await {
                Ok(()) => {
                    log!("contact message sent");
                    draft.clear();
                    status.set(SendStatus::Sent);
                    #[cfg(feature = "web")]
                    gloo_timers::callback::Timeout::new(NOTICE_MS, move || {
                        if status.get_untracked() == SendStatus::Sent {
                            status.set(SendStatus::Idle);
                        }
                    })
                    .forget();
                }
                Err(Error::Validation { field }) => status.set(SendStatus::Rejected(field)),
                Err(e) => {
                    error!("contact message failed: {e}");
                    status.set(SendStatus::Failed(e.to_string()));
                }
            }
        });
    };

    view! {
        <PageShell>
            <PageHeader title="تواصل معنا" subtitle="لأي استفسار أو لحجز حصة، راسلنا وسنرد عليك في أقرب وقت"/>

            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                <ContactDetails/>

                <Card class="lg:col-span-2">
                    <StatusBanner status/>
                    <form on:submit=on_submit novalidate=true>
                        <Input label="الاسم الكامل" value=draft.name required=true/>
                        <Input label="البريد الإلكتروني" kind="email" placeholder="name@example.com" value=draft.email required=true/>
                        <Input label="رقم الهاتف" kind="tel" value=draft.phone/>
                        <Textarea label="الرسالة" value=draft.message required=true rows=5/>
                        <button
                            type="submit"
                            class="w-full px-6 py-3 rounded-lg font-semibold transition-all duration-300 bg-gradient-to-r from-purple-900 to-indigo-900 text-white hover:from-purple-800 hover:to-indigo-800 disabled:opacity-60"
                            disabled=move || status.get() == SendStatus::Sending
                        >
                            {move || if status.get() == SendStatus::Sending { "جاري الإرسال..." } else { "إرسال" }}
                        </button>
                    </form>
                </Card>
            </div>
        </PageShell>
    }
}

#[cfg(test)]
mod tests {
    use leptos::prelude::Owner;

    use super::*;

    #[test]
    fn snapshot_trims_and_drops_blank_phone() {
        Owner::new().with(|| {
            let draft = ContactDraft::new();
            draft.name.set("  سارة ".into());
            draft.email.set(" sara@example.com".into());
            draft.phone.set("   ".into());
            draft.message.set("مرحباً\n".into());

            assert_eq!(
                draft.snapshot(),
                ContactMessage {
                    name: "سارة".into(),
                    email: "sara@example.com".into(),
                    phone: None,
                    message: "مرحباً".into(),
                }
            );
        });
    }

    #[test]
    fn snapshot_keeps_phone_when_given() {
        Owner::new().with(|| {
            let draft = ContactDraft::new();
            draft.phone.set("+212 600 000 000".into());
            assert_eq!(draft.snapshot().phone.as_deref(), Some("+212 600 000 000"));
        });
    }

    #[test]
    fn clear_empties_every_field() {
        Owner::new().with(|| {
            let draft = ContactDraft::new();
            draft.name.set("a".into());
            draft.message.set("b".into());
            draft.clear();
            assert_eq!(draft.snapshot(), ContactMessage::default());
        });
    }

    #[test]
    fn empty_draft_is_rejected_on_name() {
        Owner::new().with(|| {
            let msg = ContactDraft::new().snapshot();
            assert_eq!(msg.validate(), Err(Error::Validation { field: ContactField::Name }));
        });
    }
}
