use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Confirmation dialog for destructive actions.
///
/// Escape, the overlay and the close button all cancel. Both buttons are
/// disabled while `busy` is set so a confirmation cannot be submitted twice.
#[component]
pub fn ConfirmModal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Question shown in the body
    #[prop(into)]
    message: String,
    /// True while the confirmed action is in flight
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    // Handle Escape key
    let keydown = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_cancel.run(());
        }
    });
    on_cleanup(move || keydown.remove());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
            <div class="modal modal--confirm" role="dialog" aria-modal="true" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_cancel.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    <p>{message}</p>
                </div>
                <div class="modal-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=busy
                        on_click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting..." } else { "Yes" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=busy
                        on_click=move |_| on_cancel.run(())
                    >
                        "No"
                    </Button>
                </div>
            </div>
        </div>
    }
}
