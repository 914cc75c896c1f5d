//! Leptos screens and shared widgets.

mod catalog_screen;
mod home;
mod item_card;
mod navbar;
mod profile_screen;
mod static_lists;

pub use catalog_screen::{CatalogScreen, GamesScreen, MoviesScreen, SoftwareScreen};
pub use home::HomeScreen;
pub use item_card::ItemCard;
pub use navbar::NavBar;
pub use profile_screen::ProfileScreen;
pub use static_lists::{NftsScreen, ScriptsScreen};
