use dioxus::prelude::*;

use crate::stores::i18n::t;
use crate::utils::ContactForm as ContactFormState;

/// Contact form with local state only
#[component]
pub fn ContactForm() -> Element {
    let mut form = use_signal(ContactFormState::default);
    let mut notice = use_signal(|| None::<String>);

    let mut handle_change = move |name: &str, value: String| {
        if let Err(e) = form.write().set_field(name, value) {
            log::warn!("{}", e);
        }
    };

    rsx! {
        form {
            class: "space-y-4 bg-card border border-border rounded-xl p-6 shadow-sm",
            onsubmit: move |e| {
                e.prevent_default();
                if let Err(e) = form.read().submit() {
                    log::info!("{}", e);
                    notice.set(Some(t("form.unavailable")));
                }
            },

            div {
                class: "grid md:grid-cols-2 gap-4",
                label {
                    class: "flex flex-col gap-1 text-sm font-medium",
                    {t("form.name")}
                    input {
                        class: "px-3 py-2 rounded-lg border border-border bg-background",
                        r#type: "text",
                        name: "name",
                        required: true,
                        value: "{form.read().name}",
                        oninput: move |e| handle_change("name", e.value()),
                    }
                }
                label {
                    class: "flex flex-col gap-1 text-sm font-medium",
                    {t("form.email")}
                    input {
                        class: "px-3 py-2 rounded-lg border border-border bg-background",
                        r#type: "email",
                        name: "email",
                        required: true,
                        value: "{form.read().email}",
                        oninput: move |e| handle_change("email", e.value()),
                    }
                }
            }

            label {
                class: "flex flex-col gap-1 text-sm font-medium",
                {t("form.organization")}
                input {
                    class: "px-3 py-2 rounded-lg border border-border bg-background",
                    r#type: "text",
                    name: "organization",
                    value: "{form.read().organization}",
                    oninput: move |e| handle_change("organization", e.value()),
                }
            }

            label {
                class: "flex flex-col gap-1 text-sm font-medium",
                {t("form.message")}
                textarea {
                    class: "px-3 py-2 rounded-lg border border-border bg-background min-h-[120px]",
                    name: "message",
                    required: true,
                    value: "{form.read().message}",
                    oninput: move |e| handle_change("message", e.value()),
                }
            }

            if let Some(text) = notice.read().as_ref() {
                p {
                    class: "text-sm text-amber-700 dark:text-amber-400",
                    role: "status",
                    "{text} "
                    a {
                        href: "/contact",
                        class: "underline",
                        "/contact"
                    }
                }
            }

            button {
                r#type: "submit",
                class: "w-full md:w-auto px-6 py-3 bg-primary text-primary-foreground rounded-lg font-semibold hover:bg-primary/90 transition",
                {t("form.submit")}
            }
        }
    }
}
