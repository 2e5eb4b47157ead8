//! Demo dataset for the fleet dashboard.
//!
//! Seeds a freshly migrated store with a handful of OEMs, dealer listings and
//! reviews. Some models are listed by more than one dealer and some have no
//! reviews at all, so every dashboard section has something to show.

use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait, TransactionTrait};
use serde::Serialize;
use tracing::info;

use crate::errors::ModelError;
use crate::{oem, review, vehicle};

pub struct DemoOem {
    pub name: &'static str,
    pub contact: &'static str,
    pub city: &'static str,
    pub address: &'static str,
    pub phone: &'static str,
}

pub struct DemoVehicle {
    pub model: &'static str,
    pub dealer: &'static str,
    pub vehicle_type: &'static str,
    pub price_lakhs: f64,
}

pub struct DemoReview {
    pub model: &'static str,
    pub rating: i32,
    pub comment: &'static str,
}

pub const DEMO_OEMS: &[DemoOem] = &[
    DemoOem { name: "Tata Motors", contact: "Rohan Mehta", city: "Mumbai", address: "Bombay House, Fort", phone: "+91-22-6665-8282" },
    DemoOem { name: "Ashok Leyland", contact: "Priya Nair", city: "Chennai", address: "1 Sardar Patel Road, Guindy", phone: "+91-44-2220-6000" },
    DemoOem { name: "BharatBenz", contact: "Karthik Rao", city: "Chennai", address: "SIPCOT Industrial Park, Oragadam", phone: "+91-44-4718-3000" },
    DemoOem { name: "Eicher Motors", contact: "Arjun Singh", city: "Delhi", address: "3rd Floor, Select Citywalk, Saket", phone: "+91-11-4109-5173" },
    DemoOem { name: "Mahindra Truck and Bus", contact: "Sneha Kulkarni", city: "Pune", address: "Chakan Industrial Area", phone: "+91-20-6684-1000" },
    DemoOem { name: "Force Motors", contact: "Vikram Joshi", city: "Pune", address: "Mumbai-Pune Road, Akurdi", phone: "+91-20-2747-6381" },
    DemoOem { name: "Volvo Eicher", contact: "Ananya Iyer", city: "Bengaluru", address: "Hoskote Industrial Area", phone: "+91-80-6691-4000" },
];

pub const DEMO_VEHICLES: &[DemoVehicle] = &[
    DemoVehicle { model: "Tata Ace Gold", dealer: "Sai Motors", vehicle_type: "Mini Truck", price_lakhs: 5.5 },
    DemoVehicle { model: "Tata Ace Gold", dealer: "Concorde Motors", vehicle_type: "Mini Truck", price_lakhs: 5.8 },
    DemoVehicle { model: "Mahindra Jeeto", dealer: "Bafna Motors", vehicle_type: "Mini Truck", price_lakhs: 4.9 },
    DemoVehicle { model: "Eicher Pro 2049", dealer: "VE Commercial Pune", vehicle_type: "Light Truck", price_lakhs: 14.0 },
    DemoVehicle { model: "Tata Ultra T.7", dealer: "Sai Motors", vehicle_type: "Light Truck", price_lakhs: 17.5 },
    DemoVehicle { model: "Ashok Leyland Boss", dealer: "Chennai Auto", vehicle_type: "Intermediate Truck", price_lakhs: 25.0 },
    DemoVehicle { model: "Ashok Leyland Boss", dealer: "Delhi Fleet Hub", vehicle_type: "Intermediate Truck", price_lakhs: 26.5 },
    DemoVehicle { model: "BharatBenz 1617R", dealer: "Karthik Trucks", vehicle_type: "Intermediate Truck", price_lakhs: 30.0 },
    DemoVehicle { model: "Tata Signa 4825.TK", dealer: "Concorde Motors", vehicle_type: "Heavy Truck", price_lakhs: 48.0 },
    DemoVehicle { model: "BharatBenz 2828C", dealer: "Karthik Trucks", vehicle_type: "Heavy Truck", price_lakhs: 45.5 },
];

pub const DEMO_REVIEWS: &[DemoReview] = &[
    DemoReview { model: "Tata Ace Gold", rating: 4, comment: "Reliable for last-mile deliveries" },
    DemoReview { model: "Tata Ace Gold", rating: 5, comment: "Very low running cost" },
    DemoReview { model: "Tata Ace Gold", rating: 3, comment: "Cabin feels cramped on long routes" },
    DemoReview { model: "Eicher Pro 2049", rating: 4, comment: "Good pickup even when fully loaded" },
    DemoReview { model: "BharatBenz 1617R", rating: 5, comment: "Excellent braking and ride quality" },
    DemoReview { model: "BharatBenz 1617R", rating: 4, comment: "Service network is thin outside metros" },
    DemoReview { model: "Ashok Leyland Boss", rating: 3, comment: "Average mileage on highway runs" },
];

/// Row counts written by [`seed_demo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub oems: usize,
    pub vehicles: usize,
    pub reviews: usize,
}

impl DemoVehicle {
    fn validate(&self) -> Result<(), ModelError> {
        if !self.price_lakhs.is_finite() || self.price_lakhs < 0.0 {
            return Err(ModelError::Validation(format!("invalid price for {}", self.model)));
        }
        Ok(())
    }
}

impl DemoReview {
    fn validate(&self) -> Result<(), ModelError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ModelError::Validation(format!("rating out of range for {}", self.model)));
        }
        Ok(())
    }
}

/// Insert the demo dataset in one transaction. Expects migrated, empty tables.
pub async fn seed_demo(db: &DatabaseConnection) -> Result<SeedReport, ModelError> {
    for v in DEMO_VEHICLES { v.validate()?; }
    for r in DEMO_REVIEWS { r.validate()?; }

    let oems = DEMO_OEMS.iter().map(|o| oem::ActiveModel {
        name: Set(o.name.to_string()),
        contact: Set(Some(o.contact.to_string())),
        city: Set(o.city.to_string()),
        address: Set(Some(o.address.to_string())),
        phone: Set(Some(o.phone.to_string())),
        ..Default::default()
    });
    let vehicles = DEMO_VEHICLES.iter().map(|v| vehicle::ActiveModel {
        model: Set(v.model.to_string()),
        dealer: Set(v.dealer.to_string()),
        vehicle_type: Set(v.vehicle_type.to_string()),
        price_lakhs: Set(v.price_lakhs),
        ..Default::default()
    });
    let reviews = DEMO_REVIEWS.iter().map(|r| review::ActiveModel {
        model: Set(r.model.to_string()),
        rating: Set(r.rating),
        comment: Set(Some(r.comment.to_string())),
        ..Default::default()
    });

    let txn = db.begin().await.map_err(|e| ModelError::Db(e.to_string()))?;
    oem::Entity::insert_many(oems).exec_without_returning(&txn).await.map_err(|e| ModelError::Db(e.to_string()))?;
    vehicle::Entity::insert_many(vehicles).exec_without_returning(&txn).await.map_err(|e| ModelError::Db(e.to_string()))?;
    review::Entity::insert_many(reviews).exec_without_returning(&txn).await.map_err(|e| ModelError::Db(e.to_string()))?;
    txn.commit().await.map_err(|e| ModelError::Db(e.to_string()))?;

    let report = SeedReport { oems: DEMO_OEMS.len(), vehicles: DEMO_VEHICLES.len(), reviews: DEMO_REVIEWS.len() };
    info!(oems = report.oems, vehicles = report.vehicles, reviews = report.reviews, "demo_dataset_seeded");
    Ok(report)
}
