//! Screen implementations. Each screen is a top-level Component.

pub mod create;
pub mod dashboard;
pub mod list;
pub mod orders;
pub mod products;
pub mod suppliers;

use crate::component::Component;
use crate::screen::ScreenId;

/// Create screen components for the tab bar.
pub fn create_screens() -> Vec<(ScreenId, Box<dyn Component>)> {
    vec![
        (
            ScreenId::Dashboard,
            Box::new(dashboard::DashboardScreen::new()),
        ),
        (ScreenId::Products, Box::new(products::ProductsScreen::new())),
        (
            ScreenId::Suppliers,
            Box::new(suppliers::SuppliersScreen::new()),
        ),
        (ScreenId::Orders, Box::new(orders::OrdersScreen::new())),
        (ScreenId::Create, Box::new(create::CreateScreen::new())),
    ]
}
