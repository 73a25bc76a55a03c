pub mod card;
pub mod state;
pub mod view_model;

use self::card::ProductCardView;
use self::state::LoadPhase;
use self::view_model::ProductListViewModel;
use crate::domain::a001_product::api::HttpProductsApi;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmModal;
use crate::shared::notice::Notice;
use contracts::domain::a001_product::aggregate::ProductId;
use leptos::prelude::*;
use thaw::*;

pub const CREATE_PRODUCT_HREF: &str = "/create";
pub const CREATE_PRODUCT_LABEL: &str = "Create Product";

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let api = HttpProductsApi::from_config();
    let vm = ProductListViewModel::new();

    {
        let vm = vm.clone();
        on_cleanup(move || vm.dispose());
    }

    {
        let vm = vm.clone();
        let api = api.clone();
        wasm_bindgen_futures::spawn_local(async move {
            vm.on_mount(&api).await;
        });
    }

    let on_delete = Callback::new({
        let vm = vm.clone();
        move |id: ProductId| vm.request_delete(id)
    });

    let on_cancel = Callback::new({
        let vm = vm.clone();
        move |_: ()| vm.cancel_delete()
    });

    let on_confirm = Callback::new({
        let vm = vm.clone();
        move |_: ()| {
            let vm = vm.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                vm.confirm_delete(&api).await;
            });
        }
    });

    let notice = Signal::derive({
        let vm = vm.clone();
        move || vm.notice()
    });
    let deleting = Signal::derive({
        let vm = vm.clone();
        move || vm.is_deleting()
    });

    view! {
        <div class="content products-page">
            <h1 class="page-title">{icon("products")}"Products Dashboard"</h1>

            <Notice
                message=notice
                on_dismiss={
                    let vm = vm.clone();
                    move |id: u64| vm.dismiss_notice(id)
                }
            />

            {
                let vm = vm.clone();
                move || match vm.phase() {
                    LoadPhase::Idle => view! { <></> }.into_any(),
                    LoadPhase::Loading => view! {
                        <div class="loading">
                            <Spinner />
                            <p>"Loading data..."</p>
                        </div>
                    }
                    .into_any(),
                    LoadPhase::LoadFailed => view! {
                        <p class="error">"Error: " {vm.error().unwrap_or_default()}</p>
                    }
                    .into_any(),
                    LoadPhase::Loaded => view! {
                        <div class="cards">
                            {vm.cards().into_iter().map(|card| view! {
                                <ProductCardView card=card on_delete=on_delete />
                            }).collect_view()}
                        </div>
                    }
                    .into_any(),
                }
            }

            <div class="create-bar">
                <a href=CREATE_PRODUCT_HREF class="create-bar__link">
                    <Button appearance=ButtonAppearance::Primary attr:class="create-bar__button">
                        {icon("plus")}
                        {CREATE_PRODUCT_LABEL}
                    </Button>
                </a>
            </div>

            <Show when={
                let vm = vm.clone();
                move || vm.is_modal_open()
            }>
                <ConfirmModal
                    title="Delete product"
                    message="Are you sure you want to delete this product?"
                    busy=deleting
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
