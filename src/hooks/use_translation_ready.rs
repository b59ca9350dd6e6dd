use dioxus::prelude::*;

use crate::stores::i18n::I18N_STATE;

/// True once the translation layer is initialized and its bundle is loaded
pub fn use_translation_ready() -> Memo<bool> {
    use_memo(move || I18N_STATE.read().is_ready())
}
