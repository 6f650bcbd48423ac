use leptos::{html::Dialog, logging::log, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChange {
    ShowModal,
    Close,
}

/// What has to happen to a dialog that is `open` so it matches `visible`.
pub fn dialog_change(visible: bool, open: bool) -> Option<DialogChange> {
    match (visible, open) {
        (true, false) => Some(DialogChange::ShowModal),
        (false, true) => Some(DialogChange::Close),
        _ => None,
    }
}

#[component]
pub fn Modal(
    #[prop(into)]
    visible: Signal<bool>,
    /// called when the browser asks to dismiss the dialog (escape key)
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    children: Children
) -> impl IntoView {
    let dialog_ref = NodeRef::<Dialog>::new();

    // only a dialog opened with show_modal gets a backdrop and the cancel event
    Effect::new(move |_| {
        let visible = visible.get();
        let Some(dialog) = dialog_ref.get() else {
            return;
        };
        match dialog_change(visible, dialog.open()) {
            Some(DialogChange::ShowModal) => {
                if let Err(e) = dialog.show_modal() {
                    log!("failed to open dialog: {:?}", e);
                }
            }
            Some(DialogChange::Close) => dialog.close(),
            None => {}
        }
    });

    view! {
        <dialog
            class="modal"
            node_ref=dialog_ref
            on:cancel=move |ev: leptos::ev::Event| {
                ev.prevent_default();
                if let Some(on_close) = on_close {
                    on_close.run(());
                }
            }
        >
            <div class="modal-content">{children()}</div>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syncs_the_dialog_with_visibility() {
        assert_eq!(dialog_change(true, false), Some(DialogChange::ShowModal));
        assert_eq!(dialog_change(false, true), Some(DialogChange::Close));
        assert_eq!(dialog_change(true, true), None);
        assert_eq!(dialog_change(false, false), None);
    }
}
