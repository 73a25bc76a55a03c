use crate::shared::format::{capitalize_words, format_price};
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use leptos::prelude::*;

pub const EDIT_ICON: &str = "edit";
pub const DELETE_ICON: &str = "delete";

/// Display-ready fields of one product card
#[derive(Clone, Debug, PartialEq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub picture_url: String,
    pub details_href: String,
    pub edit_href: String,
}

impl From<&Product> for ProductCard {
    fn from(p: &Product) -> Self {
        let path_id = urlencoding::encode(p.id.as_str()).into_owned();
        Self {
            id: p.id.clone(),
            name: capitalize_words(&p.name),
            price: format!("${}", format_price(p.price)),
            picture_url: p.picture_url.clone(),
            details_href: format!("/products/{}", path_id),
            edit_href: format!("/edit/{}", path_id),
        }
    }
}

#[component]
pub fn ProductCardView(card: ProductCard, on_delete: Callback<ProductId>) -> impl IntoView {
    let ProductCard {
        id,
        name,
        price,
        picture_url,
        details_href,
        edit_href,
    } = card;
    let alt = name.clone();

    view! {
        <div class="food-card">
            <a href=details_href class="food-card__picture-link">
                <img class="food-card__picture" src=picture_url alt=alt />
            </a>
            <p class="food-card__name">{name}</p>
            <p class="food-card__price">{price}</p>
            <div class="food-card__actions">
                <a href=edit_href class="food-card__action" title="Edit" aria-label="Edit">
                    {icon(EDIT_ICON)}
                </a>
                <button
                    type="button"
                    class="food-card__action"
                    title="Delete"
                    aria-label="Delete"
                    on:click=move |_| on_delete.run(id.clone())
                >
                    {icon(DELETE_ICON)}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::test_support::product;
    use crate::shared::icons::has_icon;

    #[test]
    fn test_card_from_product() {
        let card = ProductCard::from(&product("p1", "cheese burger", 1050));
        assert_eq!(card.name, "Cheese Burger");
        assert_eq!(card.price, "$10.5");
        assert_eq!(card.details_href, "/products/p1");
        assert_eq!(card.edit_href, "/edit/p1");
    }

    #[test]
    fn test_whole_price_has_no_fraction() {
        let card = ProductCard::from(&product("p2", "taco", 1000));
        assert_eq!(card.price, "$10");
    }

    #[test]
    fn test_action_icons_are_inline_glyphs() {
        for name in [EDIT_ICON, DELETE_ICON] {
            assert!(has_icon(name), "{name} falls back to the default glyph");
            assert!(!name.ends_with(".png"));
        }
    }
}
