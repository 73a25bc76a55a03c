use crate::domain::a001_product::ui::create::ProductCreate;
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::list::ProductList;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Reads `:id` and rebuilds the details view whenever it changes
#[component]
fn ProductDetailsPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        {move || {
            params
                .get()
                .get("id")
                .map(|id| view! { <ProductDetails id=id /> })
        }}
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="content not-found">
            <h1 class="page-title">"Page not found"</h1>
            <a href="/products" class="back-link">
                {icon("chevron-left")}
                "Back to products"
            </a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <main class="container">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/products" /> } />
                    <Route path=path!("/products") view=ProductList />
                    <Route path=path!("/products/:id") view=ProductDetailsPage />
                    <Route path=path!("/create") view=ProductCreate />
                </Routes>
            </main>
        </Router>
    }
}
