// Domain models - providers, reviews, and the user/session entities

pub mod provider;
pub mod review;
pub mod user;

pub use provider::{PetChaperone, PriceRange, ProviderType, VeterinaryClinic, WeeklyHours};
pub use review::Review;
pub use user::{Pet, User, UserType};
