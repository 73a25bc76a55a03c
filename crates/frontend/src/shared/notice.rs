use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;

const NOTICE_TIMEOUT_MS: u32 = 5000;

/// One shown notice. `id` grows with every notice raised by the same owner,
/// so two notices with equal text are still told apart.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeMessage {
    pub id: u64,
    pub text: String,
}

/// Transient error banner.
///
/// `on_dismiss` receives the id of the notice being dismissed, so a timer
/// started for an older notice never clears a newer one.
#[component]
pub fn Notice<F>(
    #[prop(into)] message: Signal<Option<NoticeMessage>>,
    on_dismiss: F,
) -> impl IntoView
where
    F: Fn(u64) + Clone + Send + Sync + 'static,
{
    let dismiss_later = on_dismiss.clone();
    Effect::new(move |_| {
        if let Some(notice) = message.get() {
            let dismiss = dismiss_later.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                dismiss(notice.id);
            });
        }
    });

    view! {
        {move || {
            let dismiss = on_dismiss.clone();
            message.get().map(|notice| {
                let id = notice.id;
                view! {
                    <div class="notice" role="alert" on:click=move |_| dismiss(id)>
                        <MessageBar intent=MessageBarIntent::Error>
                            <div class="notice__body">
                                <span>{notice.text}</span>
                                <span class="notice__close">{icon("x")}</span>
                            </div>
                        </MessageBar>
                    </div>
                }
            })
        }}
    }
}
