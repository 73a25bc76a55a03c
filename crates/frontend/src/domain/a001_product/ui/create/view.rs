use super::view_model::ProductCreateViewModel;
use crate::domain::a001_product::api::HttpProductsApi;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn ProductCreate() -> impl IntoView {
    let vm = ProductCreateViewModel::new();
    let api = HttpProductsApi::from_config();
    let navigate = use_navigate();

    {
        let vm = vm.clone();
        on_cleanup(move || vm.dispose());
    }

    let error = vm.error;
    let saving = vm.saving;
    let created = RwSignal::new(false);

    Effect::new(move |_| {
        if created.get() {
            navigate("/products", Default::default());
        }
    });

    let handle_save = {
        let vm = vm.clone();
        move |_| {
            let vm = vm.clone();
            let api = api.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if vm.save(&api).await {
                    created.set(true);
                }
            });
        }
    };

    let can_submit = Signal::derive({
        let vm = vm.clone();
        move || vm.can_submit()
    });

    view! {
        <div class="content product-create">
            <a href="/products" class="back-link">
                {icon("chevron-left")}
                "Back to products"
            </a>
            <h1 class="page-title">"Create Product"</h1>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="name">"Name"</label>
                    <Input value=vm.name placeholder="Cheese burger" attr:id="name" />
                </div>

                <div class="form-group">
                    <label for="price">"Price"</label>
                    <Input value=vm.price placeholder="10.50" attr:id="price" />
                </div>

                <div class="form-group">
                    <label for="picture_url">"Picture URL"</label>
                    <Input value=vm.picture_url placeholder="https://example.com/burger.png" attr:id="picture_url" />
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !can_submit.get())
                    on_click=handle_save
                >
                    {icon("plus")}
                    {move || if saving.get() { "Saving..." } else { "Create" }}
                </Button>
            </div>
        </div>
    }
}
