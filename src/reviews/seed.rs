// Sample reviews the store starts with

use once_cell::sync::Lazy;

use crate::models::{ProviderType, Review};

#[allow(clippy::too_many_arguments)]
fn review(
    id: &str,
    provider_id: &str,
    provider_type: ProviderType,
    user_id: &str,
    user_name: &str,
    rating: u8,
    title: &str,
    comment: &str,
    date: &str,
    helpful: u32,
) -> Review {
    Review {
        id: id.to_string(),
        provider_id: provider_id.to_string(),
        provider_type,
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        rating,
        title: title.to_string(),
        comment: comment.to_string(),
        date: date.to_string(),
        helpful,
    }
}

pub static REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    vec![
        review(
            "1",
            "1",
            ProviderType::Veterinary,
            "1",
            "Sarah M.",
            5,
            "Excellent care for my dog",
            "The staff at Paws & Claws are amazing! They took great care of my dog during \
             his surgery and the follow-up care was exceptional. Highly recommend!",
            "2025-01-15",
            12,
        ),
        review(
            "2",
            "1",
            ProviderType::Veterinary,
            "2",
            "Michael T.",
            5,
            "Very professional",
            "Dr. Johnson was very thorough and explained everything clearly. The facility \
             is clean and modern. Will definitely be coming back.",
            "2025-01-10",
            8,
        ),
        review(
            "3",
            "1",
            ProviderType::Veterinary,
            "3",
            "Jennifer L.",
            4,
            "Good service, bit pricey",
            "Great care for my cat, but the prices are a bit higher than other clinics in \
             the area. Still worth it for the quality of service.",
            "2025-01-05",
            5,
        ),
        review(
            "4",
            "2",
            ProviderType::Veterinary,
            "4",
            "David R.",
            5,
            "Saved my dog's life",
            "Emergency situation at 2 AM and they were there for us. The staff was \
             incredible and saved my dog's life. Forever grateful!",
            "2025-01-12",
            24,
        ),
        review(
            "5",
            "1",
            ProviderType::Chaperone,
            "5",
            "Lisa K.",
            5,
            "Safe and comfortable transport",
            "Sarah was wonderful with my anxious cat. The van was clean and \
             climate-controlled. My cat arrived stress-free at the vet.",
            "2025-01-14",
            9,
        ),
        review(
            "6",
            "1",
            ProviderType::Chaperone,
            "6",
            "Robert P.",
            5,
            "Highly professional",
            "Very punctual and professional service. Sarah kept me updated throughout the \
             transport. Will definitely use again!",
            "2025-01-08",
            7,
        ),
        review(
            "7",
            "2",
            ProviderType::Chaperone,
            "7",
            "Amanda W.",
            5,
            "Great 24/7 service",
            "Needed emergency transport at midnight and Mike was there within 30 minutes. \
             Very reliable and caring with my dog.",
            "2025-01-11",
            15,
        ),
    ]
});
