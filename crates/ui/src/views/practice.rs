use dioxus::document::eval;
use dioxus::prelude::*;
use tracing::debug;

use crate::context::AppContext;
use crate::vm::{
    DisplayVm, KeypadKey, PracticeIntent, PracticeVm, key_for_character, keypad_layout,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn PracticeView() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.settings();
    let clock = ctx.clock();
    let vm = use_signal(|| PracticeVm::new(settings));

    let dispatch_intent = use_callback(move |intent: PracticeIntent| {
        let mut vm = vm;
        let feedback = vm.write().dispatch(intent, clock.now());
        let Some(feedback) = feedback else {
            return;
        };

        // One-shot timer per scored answer. A superseded ticket resolves as stale.
        let window = settings.feedback_window_std();
        spawn(async move {
            tokio::time::sleep(window).await;
            let outcome = vm.write().resolve(feedback.ticket);
            debug!(ticket = feedback.ticket.value(), ?outcome, "feedback window closed");
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PracticeTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    use_effect(move || {
        let _ = eval("document.getElementById(\"practice-root\")?.focus();");
    });

    let on_key = use_callback(move |evt: KeyboardEvent| {
        let key = match evt.data.key() {
            Key::Character(text) => key_for_character(&text),
            Key::Backspace => Some(KeypadKey::Backspace),
            Key::Enter => Some(KeypadKey::Submit),
            Key::Escape | Key::Delete => Some(KeypadKey::Clear),
            _ => None,
        };
        if let Some(key) = key {
            evt.prevent_default();
            dispatch_intent.call(key.intent());
        }
    });

    let (display, banner, hint) = {
        let vm = vm.read();
        (vm.display(), vm.banner(), vm.input_hint())
    };

    let display_body = match display {
        DisplayVm::Entry { text } => rsx! {
            div { class: "practice-entry", "{text}" }
        },
        DisplayVm::Working {
            prompt,
            slots,
            sum,
            reveal,
        } => {
            let slot_nodes = slots.into_iter().enumerate().map(|(index, slot)| {
                rsx! {
                    div { key: "{index}", class: slot.class(), "{slot.text}" }
                }
            });
            rsx! {
                div { class: "practice-working",
                    div { class: "practice-prompt", "{prompt}" }
                    div { class: "practice-slots", {slot_nodes} }
                    if let Some(sum) = sum {
                        div { class: "practice-sum practice-sum--active",
                            div { class: "practice-sum-label", "{sum.label}" }
                            div { class: "practice-sum-value", "{sum.text}" }
                            if let Some(reveal) = reveal.as_ref() {
                                div { class: "practice-reveal", "{reveal}" }
                            }
                        }
                    } else if let Some(reveal) = reveal.as_ref() {
                        div { class: "practice-reveal", "{reveal}" }
                    }
                }
            }
        }
    };

    let keys = keypad_layout().into_iter().map(|key| {
        let label = key.label();
        rsx! {
            button {
                key: "{label}",
                class: key.class(),
                r#type: "button",
                onclick: move |_| dispatch_intent.call(key.intent()),
                "{label}"
            }
        }
    });

    rsx! {
        div { class: "page practice-page", id: "practice-root", tabindex: "0", onkeydown: on_key,
            div { class: "practice-calculator",
                div { class: "practice-display",
                    div { class: "practice-mono", {display_body} }
                }
                if let Some(banner) = banner {
                    div { class: banner.class(), role: "status", "{banner.message}" }
                }
                if let Some(hint) = hint {
                    p { class: "practice-hint", "{hint}" }
                }
                div { class: "keypad", {keys} }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PracticeTestHandles {
    dispatch: Rc<RefCell<Option<Callback<PracticeIntent>>>>,
    vm: Rc<RefCell<Option<Signal<PracticeVm>>>>,
}

#[cfg(test)]
impl PracticeTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<PracticeIntent>, vm: Signal<PracticeVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<PracticeIntent> {
        (*self.dispatch.borrow()).expect("practice dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<PracticeVm> {
        (*self.vm.borrow()).expect("practice vm registered")
    }
}
