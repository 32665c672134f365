//! Console renderers for menus and the restaurant listing.
//!
//! Everything writes to a caller-supplied [`Write`] so output can be captured;
//! the directory wraps these with stdout helpers.

use super::error::RestaurantError;
use crate::model::{MenuItem, MenuItemKind, Restaurant};
use std::io::Write;

/// Width every listing column is padded to.
pub const COLUMN_WIDTH: usize = 25;

/// Prefix printed before every price.
pub const CURRENCY: &str = "R$";

/// Renders a price the way the menu has always shown it: whole prices keep
/// their `.0` (`2.0`), others use the shortest form (`59.9`).
pub fn price_text(price: f64) -> String {
    format!("{:?}", price)
}

/// Formats one numbered menu line, picking the template from the item's kind.
pub fn menu_line(index: usize, item: &MenuItem) -> String {
    let head = format!("{}. Nome: {} | Preço: {}{}", index, item.name, CURRENCY, price_text(item.price));
    match &item.kind {
        MenuItemKind::Dish { description } => format!("{head} | Descrição: {description}"),
        MenuItemKind::Combo { kind, size } => format!("{head} | Tipo: {kind} | Tamanho: {size}"),
        MenuItemKind::Drink { size } => format!("{head} | Tamanho: {size}"),
    }
}

/// Writes the restaurant's menu, items numbered from 1.
pub fn write_menu(out: &mut impl Write, restaurant: &Restaurant) -> Result<(), RestaurantError> {
    writeln!(out, "\nCardapio do restaurante {}\n", restaurant.name())?;
    for (i, item) in restaurant.menu().iter().enumerate() {
        writeln!(out, "{}", menu_line(i + 1, item))?;
    }
    writeln!(out, "\n")?;
    Ok(())
}

/// Writes the table of all `restaurants` with 1-based sequential IDs.
pub fn write_listing<'a>(
    out: &mut impl Write,
    restaurants: impl IntoIterator<Item = &'a Restaurant>,
) -> Result<(), RestaurantError> {
    let w = COLUMN_WIDTH;
    writeln!(
        out,
        "\n{:<w$} | {:<w$} | {:<w$} | {:<w$} Status",
        "ID", "Nome do restaurante", "Categoria", "Avaliação"
    )?;
    for (i, restaurant) in restaurants.into_iter().enumerate() {
        writeln!(
            out,
            "{:<w$} | {:<w$} | {:<w$} | {:<w$} {}",
            i + 1,
            restaurant.name(),
            restaurant.category(),
            restaurant.average_rating(),
            restaurant.active_indicator()
        )?;
    }
    writeln!(out, "\n")?;
    Ok(())
}

impl Restaurant {
    /// Writes this restaurant's menu to `out`.
    pub fn display_menu(&self, out: &mut impl Write) -> Result<(), RestaurantError> {
        write_menu(out, self)
    }
}
