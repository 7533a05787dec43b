pub mod alert_banner;
pub mod app;
pub mod icon;
pub mod nav;
pub mod sighting_panel;

pub use alert_banner::AlertBanner;
pub use app::{App, AppProps};
pub use icon::{Icon, IconDef, IconRegistry, DOG};
pub use nav::Nav;
pub use sighting_panel::SightingPanel;
