use super::view_model::ProductDetailsViewModel;
use crate::domain::a001_product::api::HttpProductsApi;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(id: String) -> impl IntoView {
    let vm = ProductDetailsViewModel::new();

    {
        let vm = vm.clone();
        on_cleanup(move || vm.dispose());
    }

    {
        let vm = vm.clone();
        let api = HttpProductsApi::from_config();
        wasm_bindgen_futures::spawn_local(async move {
            vm.load(&api, &id).await;
        });
    }

    let loading = vm.loading;
    let error = vm.error;

    view! {
        <div class="content product-details">
            <a href="/products" class="back-link">
                {icon("chevron-left")}
                "Back to products"
            </a>

            {move || loading.get().then(|| view! {
                <div class="loading">
                    <Spinner />
                    <p>"Loading data..."</p>
                </div>
            })}

            {move || error.get().map(|e| view! { <p class="error">"Error: " {e}</p> })}

            {move || vm.card().map(|card| view! {
                <div class="product-details__card">
                    <img class="product-details__picture" src=card.picture_url alt=card.name.clone() />
                    <h1 class="product-details__name">{card.name}</h1>
                    <p class="product-details__price">{card.price}</p>
                </div>
            })}
        </div>
    }
}
