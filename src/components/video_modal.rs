use dioxus::prelude::*;

use crate::components::icons::XIcon;

/// Full-screen video overlay
///
/// Rendered only while open; unmounting the `video` element is what stops
/// playback.
#[component]
pub fn VideoModal(src: String, title: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 bg-black/80 z-50 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),

            div {
                class: "relative w-full max-w-4xl",
                role: "dialog",
                aria_modal: "true",
                aria_label: "{title}",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "absolute -top-12 right-0 p-2 text-white/80 hover:text-white transition",
                    aria_label: "Close video",
                    onclick: move |_| on_close.call(()),
                    XIcon { class: "w-8 h-8".to_string() }
                }

                video {
                    src: "{src}",
                    controls: true,
                    autoplay: true,
                    playsinline: true,
                    class: "w-full rounded-xl shadow-2xl bg-black",
                }
            }
        }
    }
}
