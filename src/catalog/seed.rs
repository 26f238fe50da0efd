// Sample catalog - the seed provider records the directory starts with

use once_cell::sync::Lazy;

use crate::models::{PetChaperone, PriceRange, VeterinaryClinic, WeeklyHours};

fn hours(weekday: &str, saturday: &str, sunday: &str) -> WeeklyHours {
    WeeklyHours {
        monday: weekday.to_string(),
        tuesday: weekday.to_string(),
        wednesday: weekday.to_string(),
        thursday: weekday.to_string(),
        friday: weekday.to_string(),
        saturday: saturday.to_string(),
        sunday: sunday.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub static VETERINARY_CLINICS: Lazy<Vec<VeterinaryClinic>> = Lazy::new(|| {
    vec![
        VeterinaryClinic {
            id: "1".into(),
            name: "Paws & Claws Animal Hospital".into(),
            address: "123 Main Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94102".into(),
            phone: "(415) 555-0123".into(),
            email: "info@pawsandclaws.com".into(),
            website: Some("https://pawsandclaws.com".into()),
            rating: 4.8,
            review_count: 234,
            distance: Some(1.2),
            image: "/modern-veterinary-clinic-exterior.jpg".into(),
            services: strings(&[
                "General Care",
                "Surgery",
                "Dental",
                "Emergency Care",
                "Vaccinations",
                "X-Ray",
            ]),
            hours: hours("8:00 AM - 6:00 PM", "9:00 AM - 4:00 PM", "Closed"),
            emergency_24_7: false,
            accepts_walk_ins: true,
            description: "Full-service veterinary hospital providing comprehensive care for \
                          dogs, cats, and exotic pets. Our experienced team is dedicated to \
                          your pet's health and wellbeing."
                .into(),
        },
        VeterinaryClinic {
            id: "2".into(),
            name: "Bay Area Emergency Vet".into(),
            address: "456 Oak Avenue".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94103".into(),
            phone: "(415) 555-0456".into(),
            email: "emergency@bayareavet.com".into(),
            website: Some("https://bayareavet.com".into()),
            rating: 4.9,
            review_count: 567,
            distance: Some(2.5),
            image: "/emergency-veterinary-hospital.jpg".into(),
            services: strings(&[
                "Emergency Care",
                "Critical Care",
                "Surgery",
                "Diagnostics",
                "ICU",
            ]),
            hours: hours("Open 24 Hours", "Open 24 Hours", "Open 24 Hours"),
            emergency_24_7: true,
            accepts_walk_ins: true,
            description: "24/7 emergency veterinary care with board-certified specialists. \
                          State-of-the-art facility equipped to handle any pet emergency."
                .into(),
        },
        VeterinaryClinic {
            id: "3".into(),
            name: "Sunset Pet Clinic".into(),
            address: "789 Sunset Boulevard".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94122".into(),
            phone: "(415) 555-0789".into(),
            email: "care@sunsetpet.com".into(),
            website: None,
            rating: 4.6,
            review_count: 189,
            distance: Some(3.8),
            image: "/cozy-pet-clinic.jpg".into(),
            services: strings(&[
                "General Care",
                "Vaccinations",
                "Dental",
                "Grooming",
                "Wellness Exams",
            ]),
            hours: hours("9:00 AM - 5:00 PM", "10:00 AM - 2:00 PM", "Closed"),
            emergency_24_7: false,
            accepts_walk_ins: false,
            description: "Neighborhood veterinary clinic focused on preventive care and \
                          building lasting relationships with pets and their families."
                .into(),
        },
        VeterinaryClinic {
            id: "4".into(),
            name: "Mission District Animal Care".into(),
            address: "321 Valencia Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94110".into(),
            phone: "(415) 555-0321".into(),
            email: "hello@missionanimalcare.com".into(),
            website: None,
            rating: 4.7,
            review_count: 312,
            distance: Some(2.1),
            image: "/modern-animal-hospital.jpg".into(),
            services: strings(&[
                "General Care",
                "Surgery",
                "Dental",
                "Dermatology",
                "Behavioral Consultation",
            ]),
            hours: WeeklyHours {
                monday: "8:00 AM - 7:00 PM".into(),
                tuesday: "8:00 AM - 7:00 PM".into(),
                wednesday: "8:00 AM - 7:00 PM".into(),
                thursday: "8:00 AM - 7:00 PM".into(),
                friday: "8:00 AM - 7:00 PM".into(),
                saturday: "9:00 AM - 5:00 PM".into(),
                sunday: "10:00 AM - 3:00 PM".into(),
            },
            emergency_24_7: false,
            accepts_walk_ins: true,
            description: "Comprehensive veterinary services with extended hours and weekend \
                          availability. Specializing in both routine and advanced care."
                .into(),
        },
    ]
});

pub static PET_CHAPERONES: Lazy<Vec<PetChaperone>> = Lazy::new(|| {
    vec![
        PetChaperone {
            id: "1".into(),
            name: "Sarah Johnson".into(),
            business_name: Some("Safe Paws Transport".into()),
            address: "555 Market Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94105".into(),
            phone: "(415) 555-1111".into(),
            email: "sarah@safepaws.com".into(),
            rating: 4.9,
            review_count: 156,
            distance: Some(1.5),
            image: "/professional-pet-transport-driver-with-van.jpg".into(),
            services: strings(&[
                "Vet Appointments",
                "Airport Transport",
                "Long Distance",
                "Emergency Transport",
            ]),
            vehicle_types: strings(&["Climate-Controlled Van", "SUV"]),
            pet_types: strings(&["Dogs", "Cats", "Small Animals"]),
            price_range: PriceRange::Moderate,
            availability: "Mon-Sun, 7 AM - 9 PM".into(),
            years_experience: 8,
            licensed: true,
            insured: true,
            description: "Experienced pet transport specialist with climate-controlled \
                          vehicles. Your pet's comfort and safety are my top priorities."
                .into(),
        },
        PetChaperone {
            id: "2".into(),
            name: "Mike Chen".into(),
            business_name: Some("Pet Ride Pro".into()),
            address: "888 Howard Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94103".into(),
            phone: "(415) 555-2222".into(),
            email: "mike@petridepro.com".into(),
            rating: 4.8,
            review_count: 203,
            distance: Some(2.3),
            image: "/pet-taxi-service-vehicle.jpg".into(),
            services: strings(&[
                "Vet Appointments",
                "Grooming Transport",
                "Day Care Drop-off",
                "Emergency Transport",
            ]),
            vehicle_types: strings(&["Sedan", "SUV"]),
            pet_types: strings(&["Dogs", "Cats"]),
            price_range: PriceRange::Budget,
            availability: "24/7".into(),
            years_experience: 5,
            licensed: true,
            insured: true,
            description: "24/7 pet transportation service. Quick response times and gentle \
                          handling for anxious pets."
                .into(),
        },
        PetChaperone {
            id: "3".into(),
            name: "Jennifer Martinez".into(),
            business_name: Some("Furry Friends Express".into()),
            address: "234 Valencia Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94103".into(),
            phone: "(415) 555-3333".into(),
            email: "jen@furryfriends.com".into(),
            rating: 4.7,
            review_count: 128,
            distance: Some(1.8),
            image: "/pet-transport-professional-with-small-dog.jpg".into(),
            services: strings(&[
                "Vet Appointments",
                "Grooming Transport",
                "Airport Transport",
                "Pet Sitting",
            ]),
            vehicle_types: strings(&["SUV", "Minivan"]),
            pet_types: strings(&["Dogs", "Cats", "Birds", "Small Animals"]),
            price_range: PriceRange::Moderate,
            availability: "Mon-Sat, 6 AM - 8 PM".into(),
            years_experience: 6,
            licensed: true,
            insured: true,
            description: "Caring and reliable pet transport with experience handling all \
                          types of pets. Specialized in nervous and senior pets."
                .into(),
        },
        PetChaperone {
            id: "4".into(),
            name: "David Thompson".into(),
            business_name: Some("Bay Area Pet Taxi".into()),
            address: "567 Folsom Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94105".into(),
            phone: "(415) 555-4444".into(),
            email: "david@bayareapettaxi.com".into(),
            rating: 4.9,
            review_count: 289,
            distance: Some(2.7),
            image: "/pet-transport-van-with-logo.jpg".into(),
            services: strings(&[
                "Vet Appointments",
                "Emergency Transport",
                "Long Distance",
                "Airport Transport",
                "Multi-Pet Transport",
            ]),
            vehicle_types: strings(&["Climate-Controlled Van", "Large Van"]),
            pet_types: strings(&["Dogs", "Cats", "Exotic Pets"]),
            price_range: PriceRange::Premium,
            availability: "24/7".into(),
            years_experience: 12,
            licensed: true,
            insured: true,
            description: "Premium pet transportation service with over a decade of \
                          experience. Specializing in long-distance and multi-pet transport."
                .into(),
        },
        PetChaperone {
            id: "5".into(),
            name: "Lisa Wong".into(),
            business_name: Some("Gentle Paws Transport".into()),
            address: "890 Mission Street".into(),
            city: "San Francisco".into(),
            state: "CA".into(),
            zip_code: "94103".into(),
            phone: "(415) 555-5555".into(),
            email: "lisa@gentlepaws.com".into(),
            rating: 4.8,
            review_count: 167,
            distance: Some(3.2),
            image: "/caring-pet-transport-driver.jpg".into(),
            services: strings(&[
                "Vet Appointments",
                "Grooming Transport",
                "Day Care Drop-off",
            ]),
            vehicle_types: strings(&["Sedan", "SUV"]),
            pet_types: strings(&["Dogs", "Cats"]),
            price_range: PriceRange::Budget,
            availability: "Mon-Fri, 7 AM - 7 PM".into(),
            years_experience: 4,
            licensed: true,
            insured: true,
            description: "Affordable and gentle pet transport service. Perfect for routine \
                          vet visits and grooming appointments."
                .into(),
        },
    ]
});
