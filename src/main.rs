use restaurant_recipe::lifecycle::{setup_tracing, RestaurantDirectory};
use restaurant_recipe::model::MenuItem;
use restaurant_recipe::restaurant_actor::RestaurantError;
use tracing::{info, warn};

fn main() -> Result<(), RestaurantError> {
    setup_tracing();
    info!("Starting restaurant demo");

    let mut directory = RestaurantDirectory::new();

    let praca = directory.create_restaurant("praça", "gourmet")?;
    let burger = directory.create_restaurant("burger king", "fast food")?;
    directory.create_restaurant("pizza Hut", "fast FOOD")?;

    directory.receive_rating(burger, "Ana", 5.0)?;
    directory.receive_rating(burger, "Leo", 3.0)?;
    if let Err(e) = directory.receive_rating(burger, "Gui", 10.0) {
        warn!(error = %e, "Rating refused");
    }
    directory.toggle_active(burger)?;

    directory.add_menu_item(praca, MenuItem::dish("Pãozinho", 2.0, "O melhor pão da cidade"))?;
    directory.add_menu_item(praca, MenuItem::drink("Suco de Melancia", 5.0, "Grande"))?;
    directory.add_menu_item(praca, MenuItem::combo("Combo Família", 59.9, "Lanche", "Grande"))?;

    directory.print_all_restaurants()?;
    directory.print_menu(praca)?;

    info!(restaurants = directory.len(), "Demo completed successfully");
    Ok(())
}
