//! Terminal prompts that turn menu choices into [`Action`]s.

use anyhow::Result;
use dialoguer::{Confirm, Input, Select};

use business::domain::product::model::Product;

use crate::render::render_price;
use crate::shell::{Action, MenuChoice, ProductDraft};

/// Shows the main menu.
pub fn menu_choice() -> Result<MenuChoice> {
    let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();
    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(MenuChoice::ALL
        .get(selection)
        .copied()
        .unwrap_or(MenuChoice::Exit))
}

/// Completes `choice` into an [`Action`]. `products` feeds the picker of
/// targeted choices and is ignored otherwise.
/// Returns `None` when the user backs out or there is nothing to pick.
pub fn action_for(choice: MenuChoice, products: &[Product]) -> Result<Option<Action>> {
    let action = match choice {
        MenuChoice::List => Some(Action::List),
        MenuChoice::View => {
            pick_product(products, "View which product?")?.map(|p| Action::Show(p.id))
        }
        MenuChoice::Add => Some(Action::Add(prompt_draft(None)?)),
        MenuChoice::Update => match pick_product(products, "Update which product?")? {
            Some(product) => Some(Action::Update(product.id, prompt_draft(Some(product))?)),
            None => None,
        },
        MenuChoice::Delete => match pick_product(products, "Delete which product?")? {
            Some(product)
                if Confirm::new()
                    .with_prompt(format!("Delete {}?", product.name))
                    .default(false)
                    .interact()? =>
            {
                Some(Action::Delete(product.id))
            }
            _ => None,
        },
        MenuChoice::Search => {
            let query: String = Input::new()
                .with_prompt("Search for")
                .allow_empty(true)
                .interact_text()?;
            Some(Action::Search(query))
        }
        MenuChoice::Exit => Some(Action::Exit),
    };
    Ok(action)
}

fn pick_product<'a>(products: &'a [Product], prompt: &str) -> Result<Option<&'a Product>> {
    if products.is_empty() {
        println!("No products yet.");
        return Ok(None);
    }

    let items: Vec<String> = products
        .iter()
        .map(|p| format!("{} ({})", p.name, render_price(p.price)))
        .collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;
    Ok(products.get(selection))
}

/// Collects product fields, pre-filled from `existing` when updating.
fn prompt_draft(existing: Option<&Product>) -> Result<ProductDraft> {
    let current = existing.map(ProductDraft::from);

    let name = text_input("Name", current.as_ref().map(|d| d.name.clone()))?;
    let description = text_input("Description", current.as_ref().map(|d| d.description.clone()))?;
    let image_url = text_input("Image URL", current.as_ref().map(|d| d.image_url.clone()))?;

    let mut price_input = Input::<f64>::new().with_prompt("Price");
    if let Some(draft) = &current {
        price_input = price_input.default(draft.price);
    }
    let price = price_input.interact_text()?;

    Ok(ProductDraft {
        name,
        description,
        image_url,
        price,
    })
}

fn text_input(prompt: &str, initial: Option<String>) -> Result<String> {
    let mut input = Input::<String>::new().with_prompt(prompt);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }
    Ok(input.interact_text()?)
}
