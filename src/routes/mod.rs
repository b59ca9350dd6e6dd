use dioxus::prelude::*;

pub mod home;
pub mod file_eraser;
pub mod blog;
pub mod help;
pub mod not_found;

use home::Home;
use file_eraser::FileEraser;
use blog::DegaussingRisksBlog;
use help::{HelpIndex, HelpPage, HelpAbout, HelpFaq, HelpSupport};
use not_found::NotFound;

use crate::components::icons::{MenuIcon, XIcon};
use crate::stores::i18n::{self, t, Locale};
use crate::stores::nav_visibility::HIDE_GLOBAL_NAV;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/file-eraser")]
        FileEraser {},

        #[route("/blog/degaussing-risks")]
        DegaussingRisksBlog {},

        #[route("/help/network-file-eraser")]
        HelpIndex {},

        #[route("/help/network-file-eraser/about")]
        HelpAbout {},

        #[route("/help/network-file-eraser/faq")]
        HelpFaq {},

        #[route("/help/network-file-eraser/support")]
        HelpSupport {},

        #[route("/help/network-file-eraser/:slug")]
        HelpPage { slug: String },

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// Routes owned by other parts of the company site, linked as plain anchors
pub const CONTACT_PATH: &str = "/contact";
pub const PRODUCTS_PATH: &str = "/products";
pub const PRICING_PATH: &str = "/pricing-and-plan";
pub const BLOG_PATH: &str = "/blog";

#[component]
fn Layout() -> Element {
    let hide_nav = *HIDE_GLOBAL_NAV.read();
    let mut menu_open = use_signal(|| false);
    let current_locale = i18n::I18N_STATE.read().locale;

    rsx! {
        div {
            class: "min-h-screen flex flex-col bg-background text-foreground transition-colors",

            header {
                class: if hide_nav {
                    "sticky top-0 z-30 -translate-y-full opacity-0 pointer-events-none transition-all duration-300"
                } else {
                    "sticky top-0 z-30 bg-background/90 backdrop-blur-sm border-b border-border transition-all duration-300"
                },
                nav {
                    class: "max-w-7xl mx-auto px-6 h-16 flex items-center justify-between",

                    Link {
                        to: Route::Home {},
                        class: "flex items-center gap-2 font-bold text-xl hover:opacity-80 transition",
                        div {
                            class: "w-9 h-9 bg-blue-600 rounded-lg flex items-center justify-center text-white",
                            "D"
                        }
                        "D-Secure"
                    }

                    // Desktop links
                    div {
                        class: "hidden md:flex items-center gap-6 text-sm font-medium",
                        a { href: PRODUCTS_PATH, class: "hover:text-primary transition", {t("nav.products")} }
                        Link { to: Route::FileEraser {}, class: "hover:text-primary transition", {t("nav.file_eraser")} }
                        a { href: PRICING_PATH, class: "hover:text-primary transition", {t("nav.pricing")} }
                        a { href: BLOG_PATH, class: "hover:text-primary transition", {t("nav.blog")} }
                        Link { to: Route::HelpIndex {}, class: "hover:text-primary transition", {t("nav.help")} }
                        LocaleSelect { current: current_locale }
                        a {
                            href: CONTACT_PATH,
                            class: "px-4 py-2 bg-primary text-primary-foreground rounded-lg hover:bg-primary/90 transition",
                            {t("nav.contact")}
                        }
                    }

                    button {
                        class: "md:hidden p-2 rounded-lg hover:bg-accent",
                        aria_label: "Toggle menu",
                        aria_expanded: if *menu_open.read() { "true" } else { "false" },
                        onclick: move |_| {
                            let open = *menu_open.read();
                            menu_open.set(!open);
                        },
                        if *menu_open.read() {
                            XIcon {}
                        } else {
                            MenuIcon {}
                        }
                    }
                }

                // Mobile menu
                if *menu_open.read() {
                    div {
                        class: "md:hidden border-t border-border px-6 py-4 flex flex-col gap-3 bg-background",
                        // Any link click closes the menu
                        div {
                            class: "flex flex-col gap-3",
                            onclick: move |_| menu_open.set(false),
                            a { href: PRODUCTS_PATH, {t("nav.products")} }
                            Link { to: Route::FileEraser {}, {t("nav.file_eraser")} }
                            a { href: PRICING_PATH, {t("nav.pricing")} }
                            a { href: BLOG_PATH, {t("nav.blog")} }
                            Link { to: Route::HelpIndex {}, {t("nav.help")} }
                            a { href: CONTACT_PATH, {t("nav.contact")} }
                        }
                        LocaleSelect { current: current_locale }
                    }
                }
            }

            main {
                class: "flex-1",
                Outlet::<Route> {}
            }

            SiteFooter {}
        }
    }
}

#[component]
fn LocaleSelect(current: Locale) -> Element {
    rsx! {
        select {
            class: "bg-transparent border border-border rounded-md px-2 py-1 text-sm",
            aria_label: "Language",
            onchange: move |e| i18n::set_locale(Locale::from_str(&e.value())),
            for locale in Locale::ALL {
                option {
                    key: "{locale.as_str()}",
                    value: "{locale.as_str()}",
                    selected: locale == current,
                    "{locale.label()}"
                }
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    rsx! {
        footer {
            class: "border-t border-border mt-16",
            div {
                class: "max-w-7xl mx-auto px-6 py-10 grid gap-8 md:grid-cols-4 text-sm",
                div {
                    class: "space-y-2",
                    p { class: "font-bold text-base", "D-Secure" }
                    p {
                        class: "text-muted-foreground",
                        "Certified data erasure for drives, files and networks."
                    }
                }
                div {
                    class: "space-y-2",
                    p { class: "font-semibold", "Products" }
                    Link { to: Route::FileEraser {}, class: "block text-muted-foreground hover:text-foreground", "Network File Eraser" }
                    a { href: PRODUCTS_PATH, class: "block text-muted-foreground hover:text-foreground", "All Products" }
                    a { href: PRICING_PATH, class: "block text-muted-foreground hover:text-foreground", "Pricing & Plans" }
                }
                div {
                    class: "space-y-2",
                    p { class: "font-semibold", "Resources" }
                    Link { to: Route::HelpIndex {}, class: "block text-muted-foreground hover:text-foreground", "Help Manual" }
                    Link { to: Route::DegaussingRisksBlog {}, class: "block text-muted-foreground hover:text-foreground", "Degaussing Risks" }
                    a { href: BLOG_PATH, class: "block text-muted-foreground hover:text-foreground", "Blog" }
                }
                div {
                    class: "space-y-2",
                    p { class: "font-semibold", "Company" }
                    a { href: CONTACT_PATH, class: "block text-muted-foreground hover:text-foreground", "Contact" }
                    Link { to: Route::HelpSupport {}, class: "block text-muted-foreground hover:text-foreground", "Support" }
                }
            }
            p {
                class: "text-center text-xs text-muted-foreground pb-8",
                "© D-Secure Technologies. "
                {t("footer.rights")}
            }
        }
    }
}
