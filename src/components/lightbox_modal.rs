use dioxus::prelude::*;

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::content::GalleryImage;
use crate::hooks::use_lightbox_keys;
use crate::utils::{Lightbox, LightboxClick};

/// Thumbnail grid that opens a full-screen lightbox
#[component]
pub fn LightboxGallery(images: &'static [GalleryImage]) -> Element {
    let mut lightbox = use_signal(|| Lightbox::new(images.len()));
    use_lightbox_keys(lightbox);

    let current = lightbox.read().index();
    let total = lightbox.read().len();

    rsx! {
        div {
            class: "grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4",
            for (i, image) in images.iter().enumerate() {
                button {
                    key: "{image.url}",
                    r#type: "button",
                    class: "group relative overflow-hidden rounded-lg border border-border focus:outline-none focus:ring-2 focus:ring-primary",
                    aria_label: "Open screenshot: {image.alt}",
                    onclick: move |_| lightbox.write().open(i),
                    img {
                        src: "{image.url}",
                        alt: "{image.alt}",
                        loading: "lazy",
                        class: "w-full h-40 object-cover transition-transform group-hover:scale-105",
                    }
                }
            }
        }

        if let Some(index) = current {
            LightboxModal {
                image: images[index],
                position: index + 1,
                total,
                on_click: move |target: LightboxClick| lightbox.write().handle_click(target),
            }
        }
    }
}

/// Modal overlay for one image
///
/// Clicks on the image and the nav buttons stop propagation so only real
/// backdrop clicks close the overlay.
#[component]
fn LightboxModal(
    image: GalleryImage,
    position: usize,
    total: usize,
    on_click: EventHandler<LightboxClick>,
) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/90 z-50 flex items-center justify-center p-4",
            role: "dialog",
            aria_modal: "true",
            aria_label: "{image.alt}",
            onclick: move |_| on_click.call(LightboxClick::Backdrop),

            button {
                class: "absolute top-4 right-4 p-2 text-white/80 hover:text-white rounded-full hover:bg-white/10 transition",
                aria_label: "Close",
                onclick: move |e| {
                    e.stop_propagation();
                    on_click.call(LightboxClick::CloseButton);
                },
                XIcon { class: "w-8 h-8".to_string() }
            }

            button {
                class: "absolute left-4 p-3 text-white/80 hover:text-white rounded-full hover:bg-white/10 transition",
                aria_label: "Previous image",
                onclick: move |e| {
                    e.stop_propagation();
                    on_click.call(LightboxClick::PreviousButton);
                },
                ChevronLeftIcon { class: "w-10 h-10".to_string() }
            }

            figure {
                class: "max-w-5xl w-full flex flex-col items-center",
                img {
                    src: "{image.url}",
                    alt: "{image.alt}",
                    class: "max-h-[80vh] w-auto rounded-lg shadow-2xl",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_click.call(LightboxClick::Image);
                    },
                }
                figcaption {
                    class: "mt-4 text-sm text-white/80",
                    onclick: move |e| e.stop_propagation(),
                    "{image.alt} ({position} / {total})"
                }
            }

            button {
                class: "absolute right-4 p-3 text-white/80 hover:text-white rounded-full hover:bg-white/10 transition",
                aria_label: "Next image",
                onclick: move |e| {
                    e.stop_propagation();
                    on_click.call(LightboxClick::NextButton);
                },
                ChevronRightIcon { class: "w-10 h-10".to_string() }
            }
        }
    }
}
