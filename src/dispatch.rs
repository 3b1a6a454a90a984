use elfolio_core::{plan_dispatch, ChoicePrompt, ContactForm, Handoff, SendChannel};

/// Channel prompt backed by the browser's blocking confirm dialog.
pub(crate) struct WindowConfirm;

impl ChoicePrompt for WindowConfirm {
    fn choose_channel(&self, prompt: &str) -> SendChannel {
        let affirmed = web_sys::window()
            .map(|window| window.confirm_with_message(prompt).unwrap_or(false))
            .unwrap_or(false);
        channel_from_confirm(affirmed)
    }
}

// Dismissing the dialog and pressing Cancel are the same signal here.
pub(crate) fn channel_from_confirm(affirmed: bool) -> SendChannel {
    if affirmed {
        SendChannel::Email
    } else {
        SendChannel::Chat
    }
}

/// Plans the hand-off for a submitted form and executes it right away.
pub(crate) fn submit_contact(form: &ContactForm) {
    let handoff = plan_dispatch(form, &WindowConfirm);
    perform_handoff(&handoff);
}

pub(crate) fn perform_handoff(handoff: &Handoff) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match handoff {
        Handoff::ComposeMail { uri } => {
            gloo::console::log!("dispatch: opening mail composer");
            let _ = window.location().set_href(uri);
        }
        Handoff::OpenChat { uri } => {
            gloo::console::log!("dispatch: opening chat tab");
            let _ = window.open_with_url_and_target(uri, "_blank");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn confirm_outcome_selects_the_channel() {
        assert_eq!(channel_from_confirm(true), SendChannel::Email);
        assert_eq!(channel_from_confirm(false), SendChannel::Chat);
    }
}
