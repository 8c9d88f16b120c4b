// Sample registrations loaded at startup unless seeding is disabled

use super::pet::Pet;

/// The two pets every freshly started registry holds by default
pub fn sample_pets() -> Vec<Pet> {
    vec![
        Pet {
            id: 1,
            name: "มะลิ".to_string(),
            species: "สุนัข".to_string(),
            breed: "ชิวาว่า".to_string(),
            age: 3,
            color: "น้ำตาล".to_string(),
            owner_id: "O001".to_string(),
            owner_name: "สมชาย ใจดี".to_string(),
            registration_date: "2022-03-15".to_string(),
        },
        Pet {
            id: 2,
            name: "เหมียว".to_string(),
            species: "แมว".to_string(),
            breed: "เปอร์เซีย".to_string(),
            age: 2,
            color: "ขาว".to_string(),
            owner_id: "O002".to_string(),
            owner_name: "สมหญิง รักสัตว์".to_string(),
            registration_date: "2023-01-20".to_string(),
        },
    ]
}
