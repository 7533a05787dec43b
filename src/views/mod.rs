pub mod login_confirm_view;
pub mod login_view;
pub mod map_view;
pub mod missing_pet_view;
pub mod pets_view;

pub use login_confirm_view::LoginConfirmView;
pub use login_view::LoginView;
pub use map_view::MapView;
pub use missing_pet_view::MissingPetView;
pub use pets_view::PetsView;
